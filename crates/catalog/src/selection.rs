//! Selection state and content resolution.
//!
//! [`Selection`] is the pure state machine behind the UI: which entry is
//! active, which of its sub-tabs (if any), and whether the sidebar is shown.
//! The frontend keeps one `Selection` in a reactive cell and delegates every
//! mutation here, so the transition rules stay host-testable.

use serde::Serialize;

use crate::data::{default_entry, entry};
use crate::nav::{PageContent, SubTab};

/// What the content pane should show for the current selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentView {
    /// The entry's own page: title, description, sections in order.
    Page(&'static PageContent),
    /// A resolved sub-tab shown instead of the entry's sections. The page
    /// title and description still render above it.
    SubTab {
        page: &'static PageContent,
        tab: &'static SubTab,
    },
    /// Selection failed to resolve; the content region stays empty.
    Empty,
}

/// The three UI state cells driving conditional rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    active_page: String,
    active_sub_tab: Option<String>,
    sidebar_open: bool,
}

impl Selection {
    /// Starts on the catalog's first entry with no sub-tab and the sidebar
    /// shown.
    pub fn new() -> Self {
        Self {
            active_page: default_entry().id.to_string(),
            active_sub_tab: None,
            sidebar_open: true,
        }
    }

    pub fn active_page(&self) -> &str {
        &self.active_page
    }

    pub fn active_sub_tab(&self) -> Option<&str> {
        self.active_sub_tab.as_deref()
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn is_active_page(&self, id: &str) -> bool {
        self.active_page == id
    }

    pub fn is_active_sub_tab(&self, id: &str) -> bool {
        self.active_sub_tab.as_deref() == Some(id)
    }

    /// Activate a catalog entry. Unknown ids are ignored.
    ///
    /// Switching entries clears the sub-tab selection; carrying it over
    /// would surface stale content whenever two entries share a sub-tab id
    /// (e.g. `simple-commands` exists under both `linux` and `windows`).
    pub fn select_page(&mut self, id: &str) {
        if entry(id).is_none() {
            return;
        }
        if self.active_page != id {
            self.active_sub_tab = None;
        }
        self.active_page = id.to_string();
    }

    /// Activate a sub-tab of the current entry. Ids the entry doesn't
    /// define are ignored; the sidebar only offers the active entry's tabs,
    /// so this guard is unreachable through the UI.
    pub fn select_sub_tab(&mut self, id: &str) {
        let known = entry(&self.active_page)
            .map(|e| e.sub_tab(id).is_some())
            .unwrap_or(false);
        if known {
            self.active_sub_tab = Some(id.to_string());
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Resolve the current selection to a renderable view.
    ///
    /// A sub-tab wins only if it still resolves under the active entry;
    /// otherwise the entry's own sections render. An unknown page id (not
    /// producible through [`select_page`](Self::select_page)) degrades to
    /// an empty view.
    pub fn view(&self) -> ContentView {
        let Some(item) = entry(&self.active_page) else {
            return ContentView::Empty;
        };
        if let Some(tab) = self
            .active_sub_tab
            .as_deref()
            .and_then(|id| item.sub_tab(id))
        {
            return ContentView::SubTab {
                page: &item.content,
                tab,
            };
        }
        ContentView::Page(&item.content)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;

    #[test]
    fn starts_on_first_entry_with_sidebar_shown() {
        let state = Selection::new();
        assert_eq!(state.active_page(), "getting-started");
        assert_eq!(state.active_sub_tab(), None);
        assert!(state.sidebar_open());
    }

    #[test]
    fn every_entry_resolves_to_its_own_page_without_a_sub_tab() {
        for item in catalog() {
            let mut state = Selection::new();
            state.select_page(item.id);
            match state.view() {
                ContentView::Page(page) => {
                    assert_eq!(page.title, item.content.title);
                    assert_eq!(page.description, item.content.description);
                }
                other => panic!("expected page view for {}, got {:?}", item.id, other),
            }
        }
    }

    #[test]
    fn valid_sub_tab_renders_instead_of_sections() {
        for item in catalog().iter().filter(|e| e.has_sub_tabs()) {
            for tab in &item.sub_tabs {
                let mut state = Selection::new();
                state.select_page(item.id);
                state.select_sub_tab(tab.id);
                match state.view() {
                    ContentView::SubTab { page, tab: shown } => {
                        assert_eq!(page.title, item.content.title);
                        assert_eq!(shown.title, tab.title);
                        assert_eq!(shown.text, tab.text);
                    }
                    other => panic!("expected sub-tab view, got {:?}", other),
                }
            }
        }
    }

    #[test]
    fn linux_simple_commands_scenario() {
        let mut state = Selection::new();
        state.select_page("linux");
        state.select_sub_tab("simple-commands");
        let ContentView::SubTab { tab, .. } = state.view() else {
            panic!("expected sub-tab view");
        };
        assert_eq!(tab.title, "Simple Terminal Commands");
        assert!(tab.text.contains("- cd <dir> # Change directory to <dir>"));
    }

    #[test]
    fn getting_started_scenario_shows_only_title_and_description() {
        let mut state = Selection::new();
        state.select_page("getting-started");
        let ContentView::Page(page) = state.view() else {
            panic!("expected page view");
        };
        assert_eq!(page.title, "Getting Started With Jay's Learning");
        assert_eq!(
            page.description,
            "A simple guide to learning things about all computer related things"
        );
        assert!(page.sections.is_empty());
    }

    #[test]
    fn unknown_page_id_is_ignored() {
        let mut state = Selection::new();
        state.select_page("linux");
        state.select_page("macos");
        assert_eq!(state.active_page(), "linux");
    }

    #[test]
    fn sub_tab_of_another_entry_does_not_select() {
        let mut state = Selection::new();
        state.select_page("windows");
        // linux_directories belongs to the linux entry only.
        state.select_sub_tab("linux_directories");
        assert_eq!(state.active_sub_tab(), None);
        assert!(matches!(state.view(), ContentView::Page(_)));
    }

    #[test]
    fn switching_entries_clears_the_sub_tab() {
        let mut state = Selection::new();
        state.select_page("linux");
        state.select_sub_tab("simple-commands");
        state.select_page("windows");
        assert_eq!(state.active_sub_tab(), None);
        // windows defines its own simple-commands tab, but it must not show
        // until the user picks it.
        let ContentView::Page(page) = state.view() else {
            panic!("expected page view after switching entries");
        };
        assert_eq!(page.title, "Windows Learning");
    }

    #[test]
    fn reselecting_the_active_entry_keeps_the_sub_tab() {
        let mut state = Selection::new();
        state.select_page("linux");
        state.select_sub_tab("networking-commands");
        state.select_page("linux");
        assert_eq!(state.active_sub_tab(), Some("networking-commands"));
    }

    #[test]
    fn toggling_the_sidebar_twice_restores_visibility() {
        let mut state = Selection::new();
        let initial = state.sidebar_open();
        state.toggle_sidebar();
        assert_ne!(state.sidebar_open(), initial);
        state.toggle_sidebar();
        assert_eq!(state.sidebar_open(), initial);
    }
}
