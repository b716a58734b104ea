//! TopHeader component - application top bar.
//!
//! Contains:
//! - Toggle button for the sidebar (the narrow-viewport affordance)
//! - Application title
//! - Theme selector

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeSelect;
use leptos::prelude::*;

/// TopHeader component - main application top bar.
///
/// Uses AppGlobalContext for the sidebar visibility control.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.selection.with(|state| state.sidebar_open());

    view! {
        <div class="top-header">
            // Left section - brand
            <div class="top-header__brand">
                <span class="top-header__title">"Jay's Learning"</span>
            </div>

            // Right section - actions
            <div class="top-header__actions">
                // Sidebar toggle
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>

                // Theme selector
                <ThemeSelect />
            </div>
        </div>
    }
}
