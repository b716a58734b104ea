//! Sidebar component listing the catalog entries.
//!
//! Each entry renders as an item with its icon, title and a chevron that
//! rotates while the entry is active. The active entry's sub-tabs are
//! listed beneath it; sub-tabs of inactive entries are never offered.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use catalog::{catalog, NavigationEntry};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="app-sidebar__content">
            {catalog().iter().map(|item| view! { <SidebarEntry item=item /> }).collect_view()}
        </div>
    }
}

/// One catalog entry plus, while active, its sub-tab list.
#[component]
fn SidebarEntry(item: &'static NavigationEntry) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let entry_id = item.id;
    let is_active = move || ctx.selection.with(|state| state.is_active_page(entry_id));

    view! {
        <div>
            // Entry item
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=is_active
                on:click=move |_| ctx.open_page(entry_id)
            >
                <div class="app-sidebar__item-content">
                    {icon(item.icon)}
                    <span>{item.title}</span>
                </div>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=is_active
                >
                    {icon("chevron-right")}
                </div>
            </div>

            // Sub-tabs of the active entry
            {item.has_sub_tabs().then(|| view! {
                <Show when=is_active>
                    <div class="app-sidebar__children">
                        {item.sub_tabs.iter().map(|tab| {
                            let tab_id = tab.id;
                            view! {
                                <div
                                    class="app-sidebar__item app-sidebar__item--sub"
                                    class:app-sidebar__item--active=move || {
                                        ctx.selection.with(|state| state.is_active_sub_tab(tab_id))
                                    }
                                    on:click=move |_| ctx.open_sub_tab(tab_id)
                                >
                                    <div class="app-sidebar__item-content">
                                        <span>{tab.title}</span>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </Show>
            })}
        </div>
    }
}
