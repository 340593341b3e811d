mod chrome;
mod controller;
mod panels;
mod tab_strip;

pub use chrome::{AmbientGlow, CrtOverlay, Footer, Header, LoadingScreen};
pub use controller::Controller;
pub use panels::{Panel, PanelDeck};
pub use tab_strip::TabStrip;
