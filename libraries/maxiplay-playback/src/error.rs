//! Error types for playback control

use maxiplay_core::AudioId;
use std::time::Duration;
use thiserror::Error;

/// Failures reported by a playback engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Track could not be loaded (bad locator, decoder failure, ...)
    #[error("Failed to load {locator}: {reason}")]
    LoadFailed { locator: String, reason: String },

    /// Command not valid in the engine's current state
    #[error("Command rejected: {0}")]
    Rejected(String),

    /// Index outside the engine queue
    #[error("Index {index} out of range for queue of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Engine not reachable or shut down
    #[error("Engine unavailable: {0}")]
    Unavailable(String),
}

impl EngineError {
    /// Create a rejected-command error
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    /// Whether this is a command issued in an incompatible state
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Result type for engine commands
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Playback controller errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// A play intent failed while loading; the session item is unchanged
    #[error("Failed to start {item_id}: {source}")]
    EngineLoad {
        item_id: AudioId,
        #[source]
        source: EngineError,
    },

    /// Engine index has no entry in the controller's queue
    #[error("Engine index {engine_index} outside loaded queue of {queue_len}")]
    QueueDesync {
        engine_index: usize,
        queue_len: usize,
    },

    /// Requested item is not part of the list it was pressed in
    #[error("Item {0} not found in the candidate list")]
    ItemNotInList(AudioId),

    /// Engine stayed in buffering past the settle timeout
    #[error("Engine still buffering after {0:?}")]
    EngineBusy(Duration),

    /// Rate must be finite and positive
    #[error("Invalid playback rate: {0}")]
    InvalidRate(f32),

    /// Relative seek offset is not a finite number
    #[error("Invalid seek offset: {0}")]
    InvalidSeekOffset(f64),

    /// Configuration rejected by `PlaybackConfig::validate`
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Any other engine failure
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
