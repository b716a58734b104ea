//! Application shell - root layout of the viewer.
//!
//! Wires the [`Shell`] zones together: the sidebar navigation on the left
//! and the content pane in the center. There is no gating around the
//! layout; the catalog is static and the app is usable immediately.

use crate::content::ContentPage;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ContentPage /> }.into_any()
        />
    }
}
