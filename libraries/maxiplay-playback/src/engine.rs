//! Playback engine contract
//!
//! The engine is the platform's media player: it owns its own queue, buffers
//! tracks and reports a state signal. The controller only ever trusts the
//! engine's current index; everything else about the queue is tracked on the
//! controller side.

use crate::error::EngineResult;
use crate::types::EngineOptions;
use async_trait::async_trait;
use maxiplay_core::{AudioId, AudioItem};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::watch;

/// Engine state signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EngineState {
    /// Nothing loaded
    #[default]
    None,

    /// Loading or filling the buffer
    Buffering,

    /// Producing audio
    Playing,

    /// Loaded, not producing audio
    Paused,

    /// Stopped after end of queue or an explicit stop
    Stopped,
}

impl EngineState {
    /// States a transport command should wait out
    pub fn is_transitional(self) -> bool {
        matches!(self, Self::Buffering)
    }
}

/// A track as the engine sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineTrack {
    /// Catalog id of the item
    pub id: AudioId,

    /// Media locator
    pub url: String,

    pub title: String,

    /// Uploader display name
    pub artist: String,

    /// Poster locator
    pub artwork: Option<String>,
}

impl From<&AudioItem> for EngineTrack {
    fn from(item: &AudioItem) -> Self {
        Self {
            id: item.id.clone(),
            url: item.file.clone(),
            title: item.title.clone(),
            artist: item.owner.name.clone(),
            artwork: item.poster.clone(),
        }
    }
}

/// Convert a list of catalog items to engine tracks
pub fn engine_tracks(items: &[AudioItem]) -> Vec<EngineTrack> {
    items.iter().map(EngineTrack::from).collect()
}

/// Platform media player
///
/// Commands are async and may be slow. Implementations must be shareable
/// across tasks; the controller serializes its own commands.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaybackEngine: Send + Sync {
    /// Start the engine. Called once before the first queue is set.
    async fn initialize(&self, options: &EngineOptions) -> EngineResult<()>;

    /// Replace the engine queue
    async fn set_queue(&self, tracks: Vec<EngineTrack>) -> EngineResult<()>;

    /// Drop every queued track
    async fn reset_queue(&self) -> EngineResult<()>;

    /// Append tracks to the engine queue
    async fn add_to_queue(&self, tracks: Vec<EngineTrack>) -> EngineResult<()>;

    /// Make the track at `index` current
    async fn select_index(&self, index: usize) -> EngineResult<()>;

    async fn play(&self) -> EngineResult<()>;

    async fn pause(&self) -> EngineResult<()>;

    /// Seek within the current track
    async fn seek(&self, position: Duration) -> EngineResult<()>;

    /// Set the rate multiplier
    async fn set_rate(&self, rate: f32) -> EngineResult<()>;

    /// Position within the current track
    async fn position(&self) -> EngineResult<Duration>;

    /// Index of the current track, if any
    async fn current_index(&self) -> EngineResult<Option<usize>>;

    /// Snapshot of the engine queue
    async fn queue(&self) -> EngineResult<Vec<EngineTrack>>;

    /// Current state signal
    fn state(&self) -> EngineState;

    /// Subscribe to state changes
    fn subscribe_state(&self) -> watch::Receiver<EngineState>;

    /// Advance to the next track
    ///
    /// The default selects `current + 1`.
    async fn skip_to_next(&self) -> EngineResult<()> {
        match self.current_index().await? {
            Some(index) => self.select_index(index + 1).await,
            None => Ok(()),
        }
    }

    /// Go back to the previous track
    ///
    /// The default selects `current - 1` and does nothing at index 0.
    async fn skip_to_previous(&self) -> EngineResult<()> {
        match self.current_index().await? {
            Some(index) if index > 0 => self.select_index(index - 1).await,
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maxiplay_core::{Category, Owner, ProfileId};
    use mockall::predicate::eq;

    #[test]
    fn engine_track_from_item() {
        let item = AudioItem {
            id: AudioId::new("a1"),
            title: "Episode 1".to_string(),
            about: String::new(),
            category: Category::Tech,
            file: "https://cdn.example.com/a1.mp3".to_string(),
            poster: Some("https://cdn.example.com/a1.jpg".to_string()),
            owner: Owner {
                id: ProfileId::new("p1"),
                name: "Host".to_string(),
            },
        };

        let track = EngineTrack::from(&item);
        assert_eq!(track.id, item.id);
        assert_eq!(track.url, item.file);
        assert_eq!(track.artist, "Host");
        assert_eq!(track.artwork, item.poster);
    }

    #[test]
    fn only_buffering_is_transitional() {
        assert!(EngineState::Buffering.is_transitional());
        assert!(!EngineState::Playing.is_transitional());
        assert!(!EngineState::Paused.is_transitional());
        assert!(!EngineState::None.is_transitional());
    }

    #[tokio::test]
    async fn mocked_engine_reports_index() {
        let mut engine = MockPlaybackEngine::new();
        engine
            .expect_current_index()
            .times(1)
            .returning(|| Ok(Some(2)));
        engine
            .expect_select_index()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(()));

        let index = engine.current_index().await.unwrap();
        engine.select_index(index.unwrap() + 1).await.unwrap();
    }
}
