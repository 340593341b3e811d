use thiserror::Error;

/// Everything that can go wrong inside the arcade shell.
///
/// None of these are surfaced to the visitor: callers log them and carry
/// on rendering.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArcadeError {
    #[error("unknown section `{0}`")]
    UnknownSection(String),
    #[error("no element with id `{0}` in the document")]
    MissingElement(String),
    #[error("could not schedule task: {0}")]
    Schedule(String),
    #[error("Config Error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for ArcadeError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}
