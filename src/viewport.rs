//! Focus, click and scroll requests against elements addressed by id.
//!
//! These are cosmetic. A missing element is reported as
//! [`ArcadeError::MissingElement`] and callers are expected to log and move
//! on rather than treat it as a failure.

use crate::error::ArcadeError;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

pub trait Viewport: Send + Sync {
    /// Dispatches a synthetic click on the element.
    fn click(&self, id: &str) -> Result<(), ArcadeError>;

    /// Moves keyboard focus to the element.
    fn focus(&self, id: &str) -> Result<(), ArcadeError>;

    /// Smoothly scrolls the element into view, moving as little as possible.
    fn scroll_into_view(&self, id: &str) -> Result<(), ArcadeError>;
}

/// The live document.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomViewport;

impl DomViewport {
    fn element(id: &str) -> Result<HtmlElement, ArcadeError> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| ArcadeError::MissingElement(id.to_string()))
    }

    /// Smoothly scrolls the whole page by `dy` pixels; negative is up.
    pub fn scroll_page_by(dy: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(dy);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_by_with_scroll_to_options(&options);
    }
}

impl Viewport for DomViewport {
    fn click(&self, id: &str) -> Result<(), ArcadeError> {
        Self::element(id)?.click();
        Ok(())
    }

    fn focus(&self, id: &str) -> Result<(), ArcadeError> {
        Self::element(id)?
            .focus()
            .map_err(|_| ArcadeError::MissingElement(id.to_string()))
    }

    fn scroll_into_view(&self, id: &str) -> Result<(), ArcadeError> {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        Self::element(id)?
            .scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}
