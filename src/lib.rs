//! An arcade-cabinet résumé, rendered client-side with Leptos.
//!
//! The page boots behind a short LOADING... screen ([`loading`]), then shows
//! a tab strip and four content panels. Which panel is on screen is owned
//! by a single [`Navigator`], passed by value to every view that reads or
//! changes it.

pub mod components;
pub mod config;
pub mod content;
pub mod controls;
pub mod error;
pub mod loading;
pub mod navigation;
pub mod schedule;
pub mod section;
#[cfg(test)]
mod testing;
pub mod viewport;

use crate::{
    components::{
        AmbientGlow, Controller, CrtOverlay, Footer, Header, LoadingScreen,
        PanelDeck, TabStrip,
    },
    config::ArcadeConfig,
    controls::KeyboardControls,
    loading::LoadingGate,
    schedule::{DomScheduler, Scheduler},
    viewport::{DomViewport, Viewport},
};
use leptos::prelude::*;
use std::sync::Arc;

pub use error::ArcadeError;
pub use navigation::Navigator;
pub use section::Section;

/// The whole cabinet.
#[component]
pub fn App(
    /// Timing overrides; defaults give the standard boot pacing.
    #[prop(optional)]
    config: ArcadeConfig,
) -> impl IntoView {
    let scheduler: Arc<dyn Scheduler> = Arc::new(DomScheduler);
    let viewport: Arc<dyn Viewport> = Arc::new(DomViewport);
    let navigator = Navigator::new(
        Arc::clone(&scheduler),
        Arc::clone(&viewport),
        config.focus_delay(),
    );
    let gate = LoadingGate::start(&config, navigator, scheduler, viewport);
    let ready = gate.ready();
    on_cleanup(move || gate.cancel());

    view! {
        <main class="arcade-screen">
            <CrtOverlay/>
            <div class="arcade-content">
                <Show when=move || ready.get() fallback=|| view! { <LoadingScreen/> }>
                    <Header/>
                    <TabStrip navigator/>
                    <PanelDeck navigator/>
                    <Controller navigator/>
                    <KeyboardControls navigator/>
                    <Footer/>
                </Show>
            </div>
            <AmbientGlow/>
        </main>
    }
}
