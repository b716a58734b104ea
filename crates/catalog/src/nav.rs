//! Navigation data model.
//!
//! The catalog is a flat list of [`NavigationEntry`] records. Each entry has
//! its own page content and an optional list of sub-tabs offering alternate
//! text blocks. All fields are `&'static str` because the catalog is fixed
//! at compile time (see [`crate::data`]).

use serde::Serialize;

/// A titled block of static text shown when no sub-tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub text: &'static str,
}

impl Section {
    /// Multi-line sections render through the highlighted-block path,
    /// single-line sections as plain inline text.
    pub fn is_block(&self) -> bool {
        self.text.contains('\n')
    }
}

/// A secondary navigation item nested under an entry. Its `id` is unique
/// within the parent entry only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubTab {
    pub id: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// The primary content of an entry: a heading, a blurb, and an ordered list
/// of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContent {
    pub title: &'static str,
    pub description: &'static str,
    pub sections: Vec<Section>,
}

/// A top-level navigation item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    /// Unique slug across the catalog.
    pub id: &'static str,
    /// Label shown in the sidebar.
    pub title: &'static str,
    /// Icon name resolved by the frontend icon helper.
    pub icon: &'static str,
    pub content: PageContent,
    /// May be empty; the sidebar lists these under the active entry.
    pub sub_tabs: Vec<SubTab>,
}

impl NavigationEntry {
    /// Look up a sub-tab by id. Scoped to this entry, so an id belonging to
    /// another entry never resolves here.
    pub fn sub_tab(&self, id: &str) -> Option<&SubTab> {
        self.sub_tabs.iter().find(|tab| tab.id == id)
    }

    pub fn has_sub_tabs(&self) -> bool {
        !self.sub_tabs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with_tabs() -> NavigationEntry {
        NavigationEntry {
            id: "tools",
            title: "Tools",
            icon: "laptop",
            content: PageContent {
                title: "Tooling",
                description: "Everyday tools",
                sections: vec![],
            },
            sub_tabs: vec![
                SubTab {
                    id: "editors",
                    title: "Editors",
                    text: "- vim\n- emacs",
                },
                SubTab {
                    id: "shells",
                    title: "Shells",
                    text: "- bash\n- zsh",
                },
            ],
        }
    }

    #[test]
    fn sub_tab_lookup_is_entry_scoped() {
        let entry = entry_with_tabs();
        assert_eq!(entry.sub_tab("editors").map(|t| t.title), Some("Editors"));
        assert_eq!(entry.sub_tab("shells").map(|t| t.title), Some("Shells"));
        assert!(entry.sub_tab("simple-commands").is_none());
    }

    #[test]
    fn section_block_detection() {
        let block = Section {
            title: "Commands",
            text: "- ls\n- cd",
        };
        let inline = Section {
            title: "Intro",
            text: "A single line of prose.",
        };
        assert!(block.is_block());
        assert!(!inline.is_block());
    }
}
