//! ContentPage component - renders whatever the current selection resolves
//! to.
//!
//! The decision rule lives in `catalog::Selection::view`: a resolved
//! sub-tab wins over the entry's own sections; an unresolvable selection
//! leaves the content region empty.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::CodeBlock;
use catalog::{ContentView, PageContent, Section, SubTab};
use leptos::prelude::*;

#[component]
pub fn ContentPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="content-page">
            {move || match ctx.selection.with(|state| state.view()) {
                ContentView::Page(page) => view! { <PageView page=page /> }.into_any(),
                ContentView::SubTab { page, tab } => {
                    view! { <SubTabView page=page tab=tab /> }.into_any()
                }
                ContentView::Empty => view! { <div class="content-page__empty"></div> }.into_any(),
            }}
        </div>
    }
}

/// Page heading shared by both content branches.
#[component]
fn PageHeading(page: &'static PageContent) -> impl IntoView {
    view! {
        <h1 class="content-page__title">{page.title}</h1>
        <p class="content-page__description">{page.description}</p>
    }
}

/// The entry's own content: heading plus its sections in order.
#[component]
fn PageView(page: &'static PageContent) -> impl IntoView {
    view! {
        <PageHeading page=page />
        {page
            .sections
            .iter()
            .map(|section| view! { <SectionView section=section /> })
            .collect_view()}
    }
}

/// A sub-tab shown instead of the entry's sections.
#[component]
fn SubTabView(page: &'static PageContent, tab: &'static SubTab) -> impl IntoView {
    view! {
        <PageHeading page=page />
        <section class="content-page__section">
            <h2 class="content-page__section-title">{tab.title}</h2>
            <CodeBlock language="bash" text=tab.text />
        </section>
    }
}

/// Sections with a line break render as highlighted blocks, the rest as
/// plain inline text.
#[component]
fn SectionView(section: &'static Section) -> impl IntoView {
    view! {
        <section class="content-page__section">
            <h2 class="content-page__section-title">{section.title}</h2>
            {if section.is_block() {
                view! { <CodeBlock language="bash" text=section.text /> }.into_any()
            } else {
                view! { <p class="content-page__text">{section.text}</p> }.into_any()
            }}
        </section>
    }
}
