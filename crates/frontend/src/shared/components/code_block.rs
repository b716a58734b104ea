//! CodeBlock component - styled rendering of cheat-sheet text.
//!
//! Takes a language tag and a block of text and renders highlighted markup
//! plus a copy-to-clipboard button. The highlighter is a small
//! escape-then-wrap pass producing `<span class="hl-*">` markup; unknown
//! language tags fall back to escaped plain text.

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CodeBlock(
    /// Language tag understood by the highlighter
    language: &'static str,
    /// Raw text block
    text: &'static str,
) -> impl IntoView {
    let markup = highlight(language, text);

    let copy_text = move |_| {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(text);
        }
    };

    view! {
        <div class="code-block">
            <div class="code-block__toolbar">
                <Flex gap=FlexGap::Small>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        on_click=copy_text
                    >
                        {icon("copy")}
                        " Copy"
                    </Button>
                </Flex>
            </div>
            <pre class="code-block__body"><code inner_html=markup></code></pre>
        </div>
    }
}

/// Produce highlighted HTML for a text block in the given language.
///
/// Only shell material is understood; anything else is escaped verbatim.
pub fn highlight(language: &str, text: &str) -> String {
    match language {
        "bash" | "sh" | "shell" => highlight_shell(text),
        _ => html_escape(text),
    }
}

fn highlight_shell(text: &str) -> String {
    text.lines()
        .map(highlight_shell_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn highlight_shell_line(line: &str) -> String {
    // Full-line comments are the cheat-sheet headings.
    if line.trim_start().starts_with('#') {
        return span("hl-comment", &html_escape(line));
    }

    // A trailing ` # …` annotates the command on the same line.
    let (code, comment) = match line.find(" # ") {
        Some(pos) => (&line[..pos], Some(&line[pos..])),
        None => (line, None),
    };

    let mut out = highlight_shell_code(code);
    if let Some(comment) = comment {
        out.push_str(&span("hl-comment", &html_escape(comment)));
    }
    out
}

/// Wrap the tokens of a command fragment: the first word is the command,
/// `<…>` tokens are placeholders, `-x` tokens are flags. The leading `- `
/// bullet marker stays plain.
fn highlight_shell_code(code: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut command_seen = false;

    for token in code.split(' ') {
        let escaped = html_escape(token);
        let bare = token.trim_end_matches(',');

        let piece = if token.is_empty() || token == "-" {
            escaped
        } else if bare.starts_with('<') && bare.ends_with('>') {
            span("hl-placeholder", &escaped)
        } else if !command_seen {
            command_seen = true;
            span("hl-command", &escaped)
        } else if bare.starts_with('-') {
            span("hl-flag", &escaped)
        } else {
            escaped
        };
        parts.push(piece);
    }

    parts.join(" ")
}

fn span(class: &str, text: &str) -> String {
    format!("<span class=\"{}\">{}</span>", class, text)
}

/// Simple HTML escape
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            html_escape("<dir> & \"quotes\""),
            "&lt;dir&gt; &amp; &quot;quotes&quot;"
        );
    }

    #[test]
    fn unknown_language_is_escaped_passthrough() {
        let out = highlight("rust", "fn main() { 1 < 2 }");
        assert_eq!(out, "fn main() { 1 &lt; 2 }");
        assert!(!out.contains("<span"));
    }

    #[test]
    fn heading_line_becomes_a_comment_span() {
        let out = highlight("bash", "# File and Directory Management");
        assert_eq!(
            out,
            "<span class=\"hl-comment\"># File and Directory Management</span>"
        );
    }

    #[test]
    fn command_and_trailing_comment_are_wrapped() {
        let out = highlight("bash", "- ls # List directory contents");
        assert!(out.contains("<span class=\"hl-command\">ls</span>"));
        assert!(out.contains("<span class=\"hl-comment\"> # List directory contents</span>"));
        assert!(out.starts_with("- "));
    }

    #[test]
    fn placeholders_and_flags_get_their_own_spans() {
        let out = highlight("bash", "- cp <src> <dest> # Copy file or directory");
        assert!(out.contains("<span class=\"hl-placeholder\">&lt;src&gt;</span>"));
        assert!(out.contains("<span class=\"hl-placeholder\">&lt;dest&gt;</span>"));

        let out = highlight("bash", "- df -h # Show disk usage");
        assert!(out.contains("<span class=\"hl-command\">df</span>"));
        assert!(out.contains("<span class=\"hl-flag\">-h</span>"));
    }

    #[test]
    fn placeholder_with_trailing_comma_still_resolves() {
        let out = highlight("bash", "- apt install <package>, apt update");
        assert!(out.contains("<span class=\"hl-placeholder\">&lt;package&gt;,</span>"));
    }

    #[test]
    fn multi_line_blocks_keep_their_line_structure() {
        let out = highlight("bash", "# Networking\n- ping <host> # Check connectivity");
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("hl-comment"));
        assert!(lines[1].contains("hl-command"));
    }
}
