/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid action '{action}': {reason}")]
    Action { action: String, reason: String },

    #[error("Unknown list: {0}")]
    UnknownList(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] maxiplay_core::CoreError),

    #[error("Playback error: {0}")]
    Playback(#[from] maxiplay_playback::PlaybackError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn action(action: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Action {
            action: action.into(),
            reason: reason.into(),
        }
    }
}
