use catalog::Selection;
use leptos::prelude::*;

/// Reactive store for the three UI state cells: active entry, active
/// sub-tab, sidebar visibility. The transition rules live in
/// [`catalog::Selection`]; this wrapper only makes them reactive.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub selection: RwSignal<Selection>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(Selection::new()),
        }
    }

    /// Activate a catalog entry. Unknown ids are ignored and the sub-tab
    /// selection is cleared (see `Selection::select_page`).
    pub fn open_page(&self, id: &str) {
        leptos::logging::log!("open_page: id='{}'", id);
        self.selection.update(|state| state.select_page(id));
    }

    /// Activate a sub-tab of the current entry.
    pub fn open_sub_tab(&self, id: &str) {
        leptos::logging::log!("open_sub_tab: id='{}'", id);
        self.selection.update(|state| state.select_sub_tab(id));
    }

    pub fn toggle_left(&self) {
        self.selection.update(|state| state.toggle_sidebar());
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
