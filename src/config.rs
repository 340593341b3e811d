//! Timing and logging knobs for the arcade shell.
//!
//! Defaults give the standard boot pacing. A build can override any
//! of them by editing `Arcade.toml`, which is embedded into the binary at
//! compile time:
//!
//! ```toml
//! startup-delay-ms = 800
//! init-delay-ms = 300
//! focus-delay-ms = 10
//! log-level = "info"
//! ```

use crate::error::ArcadeError;
use config::{Config, File, FileFormat};
use serde::{de, Deserialize, Deserializer};
use std::{str::FromStr, time::Duration};
use typed_builder::TypedBuilder;

/// The configuration file bundled with the site.
pub const EMBEDDED_CONFIG: &str = include_str!("../Arcade.toml");

#[derive(TypedBuilder, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ArcadeConfig {
    /// How long the LOADING... screen stays up.
    #[builder(default = 800)]
    pub startup_delay_ms: u64,
    /// Pause between becoming ready and selecting the default tab.
    #[builder(default = 300)]
    pub init_delay_ms: u64,
    /// Pause between a tab change and the focus/scroll follow-up.
    #[builder(default = 10)]
    pub focus_delay_ms: u64,
    #[builder(default = log::Level::Info)]
    #[serde(deserialize_with = "level_from_str")]
    pub log_level: log::Level,
}

fn level_from_str<'de, D>(deserializer: D) -> Result<log::Level, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    log::Level::from_str(&name).map_err(de::Error::custom)
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ArcadeConfig {
    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    pub fn init_delay(&self) -> Duration {
        Duration::from_millis(self.init_delay_ms)
    }

    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_delay_ms)
    }

    /// Parses a TOML document; keys it omits keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ArcadeError> {
        let config = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Parses [`EMBEDDED_CONFIG`].
    pub fn load() -> Result<Self, ArcadeError> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }
}
