//! Decoration around the résumé: CRT glass, glow, header and footer.

use crate::content;
use leptos::prelude::*;

/// Scanlines drawn over the whole screen. Ignores pointer events.
#[component]
pub fn CrtOverlay() -> impl IntoView {
    view! {
        <div class="crt" aria-hidden="true">
            <div class="scanline"></div>
        </div>
    }
}

#[component]
pub fn AmbientGlow() -> impl IntoView {
    view! {
        <div class="glow glow-top-left" aria-hidden="true"></div>
        <div class="glow glow-bottom-right" aria-hidden="true"></div>
    }
}

/// Placeholder shown until the loading gate opens.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <div class="loading-text">"LOADING..."</div>
            <div class="loading-bar">
                <div class="loading-bar-fill"></div>
            </div>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="marquee">
            <h1 class="neon-text">{content::NAME}</h1>
            <p class="tagline">{content::TAGLINE}</p>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="credits">
            <p class="blink">{content::FOOTER}</p>
        </footer>
    }
}
