use crate::{
    controls::Control, navigation::Navigator, section::Section,
    viewport::DomViewport,
};
use leptos::{ev::MouseEvent, prelude::*};

/// Pixels scrolled per press of D-pad up or down.
pub const SCROLL_STEP: f64 = 240.0;

/// The on-screen game pad: a D-pad that changes tab (left/right) and
/// scrolls (up/down), and one face button per section.
#[component]
pub fn Controller(navigator: Navigator) -> impl IntoView {
    let press =
        move |control: Control| move |_: MouseEvent| control.apply(navigator);

    view! {
        <div class="controller" aria-label="Controller">
            <div class="dpad">
                <button
                    type="button"
                    class="dpad-up"
                    aria-label="Scroll up"
                    on:click=move |_| DomViewport::scroll_page_by(-SCROLL_STEP)
                >
                    "\u{25B2}"
                </button>
                <button
                    type="button"
                    class="dpad-left"
                    aria-label="Previous section"
                    on:click=press(Control::Previous)
                >
                    "\u{25C0}"
                </button>
                <button
                    type="button"
                    class="dpad-right"
                    aria-label="Next section"
                    on:click=press(Control::Next)
                >
                    "\u{25B6}"
                </button>
                <button
                    type="button"
                    class="dpad-down"
                    aria-label="Scroll down"
                    on:click=move |_| DomViewport::scroll_page_by(SCROLL_STEP)
                >
                    "\u{25BC}"
                </button>
            </div>
            <div class="face-buttons">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    let pressed = if navigator.is_active(section) {
                                        " pressed"
                                    } else {
                                        ""
                                    };
                                    format!("face-button accent-{}{pressed}", section.accent())
                                }
                                aria-label=section.label()
                                on:click=press(Control::Jump(section))
                            >
                                {section.button().to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
