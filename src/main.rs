use arcade_resume::{config::ArcadeConfig, App};
use leptos::prelude::*;

pub fn main() {
    console_error_panic_hook::set_once();

    let config = ArcadeConfig::load();
    _ = console_log::init_with_level(
        config.as_ref().map_or(log::Level::Info, |c| c.log_level),
    );
    let config = config.unwrap_or_else(|e| {
        log::warn!("ignoring Arcade.toml: {e}");
        ArcadeConfig::default()
    });

    leptos::mount::mount_to_body(move || view! { <App config/> })
}
