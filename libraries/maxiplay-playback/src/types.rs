//! Core types for playback control

use crate::error::{PlaybackError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Controller readiness
///
/// `Uninitialized` until the engine has accepted a first queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Engine never loaded anything
    Uninitialized,

    /// Engine holds a queue
    Ready,
}

/// What the presentation layer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Nothing selected yet
    Empty,

    /// Engine buffering or connecting
    Loading,

    /// Currently playing
    Playing,

    /// Item loaded but not playing
    Paused,
}

/// Options handed to `PlaybackEngine::initialize`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Buffer to fill before playback starts (default: 15000 ms)
    #[serde(default = "default_min_buffer_ms")]
    pub min_buffer_ms: u64,

    /// Upper bound of buffered media (default: 50000 ms)
    #[serde(default = "default_max_buffer_ms")]
    pub max_buffer_ms: u64,

    /// Hold playback until `min_buffer_ms` is available (default: true)
    #[serde(default = "default_wait_for_buffer")]
    pub wait_for_buffer: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            min_buffer_ms: default_min_buffer_ms(),
            max_buffer_ms: default_max_buffer_ms(),
            wait_for_buffer: default_wait_for_buffer(),
        }
    }
}

/// Configuration for the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Engine startup options
    #[serde(default)]
    pub engine: EngineOptions,

    /// Step of the skip forward/backward buttons (default: 10 s)
    #[serde(default = "default_skip_interval_secs")]
    pub skip_interval_secs: u64,

    /// How long a transport command waits for buffering to resolve (default: 5000 ms)
    #[serde(default = "default_settle_timeout_ms")]
    pub settle_timeout_ms: u64,

    /// Rate of a fresh session (default: 1.0)
    #[serde(default = "default_initial_rate")]
    pub initial_rate: f32,

    /// Rates offered by the rate selector
    #[serde(default = "default_rates")]
    pub rates: Vec<f32>,
}

impl PlaybackConfig {
    /// Skip step as a duration
    pub fn skip_interval(&self) -> Duration {
        Duration::from_secs(self.skip_interval_secs)
    }

    /// Settle timeout as a duration
    pub fn settle_timeout(&self) -> Duration {
        Duration::from_millis(self.settle_timeout_ms)
    }

    /// Reject values the controller cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.settle_timeout_ms == 0 {
            return Err(PlaybackError::InvalidConfig(
                "settle_timeout_ms must be greater than zero".to_string(),
            ));
        }

        if self.engine.min_buffer_ms > self.engine.max_buffer_ms {
            return Err(PlaybackError::InvalidConfig(format!(
                "min_buffer_ms ({}) exceeds max_buffer_ms ({})",
                self.engine.min_buffer_ms, self.engine.max_buffer_ms
            )));
        }

        if let Some(rate) = std::iter::once(&self.initial_rate)
            .chain(&self.rates)
            .find(|r| !is_valid_rate(**r))
        {
            return Err(PlaybackError::InvalidConfig(format!(
                "playback rate {rate} must be finite and positive"
            )));
        }

        Ok(())
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            engine: EngineOptions::default(),
            skip_interval_secs: default_skip_interval_secs(),
            settle_timeout_ms: default_settle_timeout_ms(),
            initial_rate: default_initial_rate(),
            rates: default_rates(),
        }
    }
}

/// Finite and strictly positive
pub(crate) fn is_valid_rate(rate: f32) -> bool {
    rate.is_finite() && rate > 0.0
}

// Default values
fn default_min_buffer_ms() -> u64 {
    15_000
}

fn default_max_buffer_ms() -> u64 {
    50_000
}

fn default_wait_for_buffer() -> bool {
    true
}

fn default_skip_interval_secs() -> u64 {
    10
}

fn default_settle_timeout_ms() -> u64 {
    5_000
}

fn default_initial_rate() -> f32 {
    1.0
}

fn default_rates() -> Vec<f32> {
    vec![0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0]
}
