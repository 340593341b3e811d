//! Game-pad style keyboard controls.
//!
//! `ArrowLeft`/`ArrowRight` move between neighbouring tabs and the face
//! buttons `A`, `X`, `Y` and `B` jump straight to About, Skills, Experience
//! and Contact. `ArrowUp`/`ArrowDown` are left to the browser so they keep
//! scrolling the page.

use crate::{navigation::Navigator, section::Section};
use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};

/// A navigation request issued from the controller or the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
    Jump(Section),
}

impl Control {
    /// Maps a `KeyboardEvent.key` value to a control.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Control::Previous),
            "ArrowRight" => Some(Control::Next),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Section::from_button(c).map(Control::Jump),
                    _ => None,
                }
            }
        }
    }

    pub fn apply(self, navigator: Navigator) {
        match self {
            Control::Previous => navigator.select_previous(),
            Control::Next => navigator.select_next(),
            Control::Jump(section) => navigator.select(section),
        }
    }
}

fn typing_into(target: Option<HtmlElement>) -> bool {
    target.is_some_and(|el| {
        el.is_content_editable()
            || matches!(
                el.tag_name().as_str(),
                "INPUT" | "TEXTAREA" | "SELECT"
            )
    })
}

/// Control for a key press, or `None` if the press should be left alone.
fn control_for(ev: &KeyboardEvent) -> Option<Control> {
    if ev.ctrl_key() || ev.alt_key() || ev.meta_key() {
        return None;
    }
    let target = ev.target().and_then(|t| t.dyn_into::<HtmlElement>().ok());
    if typing_into(target) {
        return None;
    }
    Control::from_key(&ev.key())
}

/// Listens for controller keys on the window for as long as it is mounted.
#[component]
pub fn KeyboardControls(navigator: Navigator) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if let Some(control) = control_for(&ev) {
            log::trace!("key {:?} -> {control:?}", ev.key());
            ev.prevent_default();
            control.apply(navigator);
        }
    });
    on_cleanup(move || handle.remove());
}
