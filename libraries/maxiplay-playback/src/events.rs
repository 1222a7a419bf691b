//! Playback Events
//!
//! Emitted by the controller after a command has been applied, for the
//! presentation layer to pick up with `PlaybackController::drain_events`.

use maxiplay_core::AudioId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlaybackEvent {
    /// Session item changed
    TrackChanged {
        /// ID of the new (current) item
        item_id: AudioId,
        /// ID of the previous item (if any)
        previous_item_id: Option<AudioId>,
    },

    /// Engine queue was rebuilt from a new list
    QueueReplaced {
        /// New queue length
        length: usize,
    },

    /// Playback paused by a user command
    Paused,

    /// Playback resumed by a user command
    Resumed,

    /// Position changed by a seek or skip
    Seeked {
        /// New position in milliseconds
        position_ms: u64,
    },

    /// Playback rate changed
    RateChanged {
        /// New rate multiplier
        rate: f32,
    },

    /// Engine reported an index the controller's queue does not have
    QueueDesync {
        /// Index reported by the engine
        engine_index: usize,
        /// Length of the controller's queue
        queue_length: usize,
    },

    /// Error occurred during a command
    Error {
        /// Error message
        message: String,
    },
}
