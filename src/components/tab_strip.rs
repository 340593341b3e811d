use crate::{navigation::Navigator, section::Section};
use leptos::prelude::*;

fn icon(section: Section) -> &'static str {
    match section {
        Section::About => "\u{1F3AE}",
        Section::Skills => "\u{1F4BF}",
        Section::Experience => "\u{23F1}",
        Section::Contact => "\u{1F3A7}",
    }
}

/// One tab per [`Section`], reflecting and changing the navigator.
#[component]
pub fn TabStrip(navigator: Navigator) -> impl IntoView {
    view! {
        <nav class="tab-frame">
            <div class="tab-list" role="tablist" aria-label="Resume Sections">
                {Section::ALL
                    .into_iter()
                    .map(|section| view! { <Tab navigator section/> })
                    .collect_view()}
            </div>
        </nav>
    }
}

#[component]
fn Tab(navigator: Navigator, section: Section) -> impl IntoView {
    let selected = move || navigator.is_active(section);

    view! {
        <button
            type="button"
            id=section.tab_id()
            class=format!("tab accent-{}", section.accent())
            role="tab"
            aria-controls=section.panel_id()
            aria-selected=move || selected().to_string()
            data-state=move || if selected() { "active" } else { "inactive" }
            data-tab=section.id()
            tabindex=move || if selected() { "0" } else { "-1" }
            on:click=move |_| navigator.select(section)
        >
            <span class="tab-icon" aria-hidden="true">{icon(section)}</span>
            <span class="tab-label">{section.label()}</span>
        </button>
    }
}
