//! Playback controller
//!
//! Coordinates user intents against the engine and the session store.
//!
//! The controller owns the queue the engine was loaded with. Next/previous
//! resolve the new item from that queue and only trust the engine's index.
//! All commands run under one async lock, so two intents never interleave
//! their engine commands.

use crate::engine::{engine_tracks, EngineState, PlaybackEngine};
use crate::error::{EngineError, PlaybackError, Result};
use crate::events::PlaybackEvent;
use crate::queue::PlaybackQueue;
use crate::session::SessionStore;
use crate::types::{is_valid_rate, Phase, PlaybackConfig, PlayerStatus};
use maxiplay_core::{AudioId, AudioItem};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
}

#[derive(Debug)]
struct ControllerState {
    phase: Phase,
    /// Queue the engine currently holds
    loaded: PlaybackQueue,
    events: Vec<PlaybackEvent>,
}

/// Playback session state machine
pub struct PlaybackController {
    engine: Arc<dyn PlaybackEngine>,
    session: Arc<SessionStore>,
    config: PlaybackConfig,
    inner: Mutex<ControllerState>,
}

impl PlaybackController {
    /// Create a controller around an engine and a session store
    ///
    /// The engine is not touched until the first play intent.
    pub fn new(
        engine: Arc<dyn PlaybackEngine>,
        session: Arc<SessionStore>,
        config: PlaybackConfig,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            engine,
            session,
            config,
            inner: Mutex::new(ControllerState {
                phase: Phase::Uninitialized,
                loaded: PlaybackQueue::default(),
                events: Vec::new(),
            }),
        })
    }

    /// User selected `item` from `list`
    ///
    /// First play loads the engine. Pressing the current item toggles
    /// play/pause. Any other item switches track, reloading the engine queue
    /// only when `list` differs from the loaded queue.
    pub async fn on_audio_press(&self, item: &AudioItem, list: &[AudioItem]) -> Result<()> {
        let mut state = self.inner.lock().await;

        if state.phase == Phase::Uninitialized {
            return self.first_play(&mut state, item, list).await;
        }

        let engine_state = self.settle().await?;
        let is_current = self
            .session
            .current_item()
            .is_some_and(|current| current.same_track(item));

        if is_current {
            match engine_state {
                EngineState::Playing => return self.pause_engine(&mut state).await,
                EngineState::Paused => return self.resume_engine(&mut state).await,
                other => debug!(item_id = %item.id, state = ?other, "Reloading idle item"),
            }
        }

        self.switch_track(&mut state, item, list).await
    }

    /// Pause when playing, resume when paused, otherwise nothing
    pub async fn toggle_play_pause(&self) -> Result<()> {
        let mut state = self.inner.lock().await;

        if state.phase == Phase::Uninitialized {
            debug!("Toggle before first play ignored");
            return Ok(());
        }

        match self.engine.state() {
            EngineState::Playing => self.pause_engine(&mut state).await,
            EngineState::Paused => self.resume_engine(&mut state).await,
            other => {
                debug!(state = ?other, "Toggle ignored");
                Ok(())
            }
        }
    }

    /// Seek to an absolute position; range checks are left to the engine
    pub async fn seek_to(&self, position: Duration) -> Result<()> {
        let mut state = self.inner.lock().await;

        if state.phase == Phase::Uninitialized {
            return Ok(());
        }

        self.settle().await?;
        self.seek_engine(&mut state, position).await
    }

    /// Seek relative to the current position, clamped at zero
    pub async fn skip_by(&self, delta_secs: f64) -> Result<()> {
        if !delta_secs.is_finite() {
            return Err(PlaybackError::InvalidSeekOffset(delta_secs));
        }

        let mut state = self.inner.lock().await;

        if state.phase == Phase::Uninitialized {
            return Ok(());
        }

        self.settle().await?;
        let current = self.engine.position().await?;
        let target = Duration::try_from_secs_f64((current.as_secs_f64() + delta_secs).max(0.0))
            .map_err(|_| PlaybackError::InvalidSeekOffset(delta_secs))?;

        self.seek_engine(&mut state, target).await
    }

    /// Skip forward by the configured interval
    pub async fn skip_forward(&self) -> Result<()> {
        let interval = self.config.skip_interval().as_secs_f64();
        self.skip_by(interval).await
    }

    /// Skip backward by the configured interval
    pub async fn skip_backward(&self) -> Result<()> {
        let interval = self.config.skip_interval().as_secs_f64();
        self.skip_by(-interval).await
    }

    pub async fn on_next_press(&self) -> Result<()> {
        self.navigate(Direction::Next).await
    }

    pub async fn on_previous_press(&self) -> Result<()> {
        self.navigate(Direction::Previous).await
    }

    /// Apply a rate multiplier on the engine
    ///
    /// The session store is left alone; see `apply_playback_rate`.
    pub async fn set_playback_rate(&self, rate: f32) -> Result<()> {
        if !is_valid_rate(rate) {
            return Err(PlaybackError::InvalidRate(rate));
        }

        let mut state = self.inner.lock().await;
        match self.engine.set_rate(rate).await {
            Ok(()) => {}
            Err(e) if e.is_rejected() => {
                debug!(rate, error = %e, "Rate change rejected");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        debug!(rate, "Playback rate set");
        state.events.push(PlaybackEvent::RateChanged { rate });
        Ok(())
    }

    /// Set the engine rate and mirror it into the session store
    pub async fn apply_playback_rate(&self, rate: f32) -> Result<()> {
        self.set_playback_rate(rate).await?;
        self.session.set_playback_rate(rate);
        Ok(())
    }

    /// Engine reports playing
    pub fn is_playing(&self) -> bool {
        self.engine.state() == EngineState::Playing
    }

    /// Status for the presentation layer
    pub async fn status(&self) -> PlayerStatus {
        let state = self.inner.lock().await;

        if state.phase == Phase::Uninitialized || self.session.current_item().is_none() {
            return PlayerStatus::Empty;
        }

        match self.engine.state() {
            EngineState::Playing => PlayerStatus::Playing,
            EngineState::Buffering | EngineState::None => PlayerStatus::Loading,
            EngineState::Paused | EngineState::Stopped => PlayerStatus::Paused,
        }
    }

    pub async fn phase(&self) -> Phase {
        self.inner.lock().await.phase
    }

    /// Ids of the queue the engine was loaded with
    pub async fn loaded_ids(&self) -> Vec<AudioId> {
        self.inner
            .lock()
            .await
            .loaded
            .iter()
            .map(|item| item.id.clone())
            .collect()
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Take all events emitted since the last call
    pub async fn drain_events(&self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.inner.lock().await.events)
    }

    async fn first_play(
        &self,
        state: &mut ControllerState,
        item: &AudioItem,
        list: &[AudioItem],
    ) -> Result<()> {
        let index = index_in(item, list)?;

        if let Err(e) = self.engine.initialize(&self.config.engine).await {
            return Err(Self::load_failed(state, item, e));
        }
        if let Err(e) = self.engine.set_queue(engine_tracks(list)).await {
            return Err(Self::load_failed(state, item, e));
        }

        state.phase = Phase::Ready;
        state.loaded = PlaybackQueue::from(list);
        let length = list.len();
        state.events.push(PlaybackEvent::QueueReplaced { length });
        info!(length, "Engine initialized with queue");

        let rate = self.session.playback_rate();
        if (rate - 1.0).abs() > f32::EPSILON {
            if let Err(e) = self.engine.set_rate(rate).await {
                warn!(rate, error = %e, "Failed to restore playback rate");
            }
        }

        self.start_at(state, item, list, index).await
    }

    async fn switch_track(
        &self,
        state: &mut ControllerState,
        item: &AudioItem,
        list: &[AudioItem],
    ) -> Result<()> {
        let index = index_in(item, list)?;

        match self.engine.pause().await {
            Ok(()) => {}
            Err(e) if e.is_rejected() => debug!(error = %e, "Pause before switch rejected"),
            Err(e) => return Err(Self::load_failed(state, item, e)),
        }

        if !state.loaded.is_same_queue(list) {
            // From here on the engine queue no longer matches `loaded`
            state.loaded = PlaybackQueue::default();

            if let Err(e) = self.engine.reset_queue().await {
                return Err(Self::load_failed(state, item, e));
            }
            if let Err(e) = self.engine.add_to_queue(engine_tracks(list)).await {
                return Err(Self::load_failed(state, item, e));
            }

            state.loaded = PlaybackQueue::from(list);
            let length = list.len();
            state.events.push(PlaybackEvent::QueueReplaced { length });
            info!(length, "Engine queue replaced");
        } else {
            debug!(length = list.len(), "Same queue, reload skipped");
        }

        self.start_at(state, item, list, index).await
    }

    /// Select `index`, play, then publish the new session
    async fn start_at(
        &self,
        state: &mut ControllerState,
        item: &AudioItem,
        list: &[AudioItem],
        index: usize,
    ) -> Result<()> {
        if let Err(e) = self.engine.select_index(index).await {
            return Err(Self::load_failed(state, item, e));
        }
        if let Err(e) = self.engine.play().await {
            return Err(Self::load_failed(state, item, e));
        }

        let previous = self.session.current_item().map(|i| i.id);
        self.session.update(|session| {
            if !session.current_queue.is_same_queue(list) {
                session.current_queue = PlaybackQueue::from(list);
            }
            session.current_item = Some(item.clone());
        });

        info!(item_id = %item.id, index, "Now playing");
        state.events.push(PlaybackEvent::TrackChanged {
            item_id: item.id.clone(),
            previous_item_id: previous,
        });
        Ok(())
    }

    async fn navigate(&self, direction: Direction) -> Result<()> {
        let mut state = self.inner.lock().await;

        if state.phase == Phase::Uninitialized {
            debug!(?direction, "Navigation before first play ignored");
            return Ok(());
        }

        self.settle().await?;

        let Some(index) = self.engine.current_index().await? else {
            debug!(?direction, "No current track");
            return Ok(());
        };

        let queue_len = state.loaded.len();
        if index >= queue_len {
            warn!(
                engine_index = index,
                queue_len,
                "Engine index outside loaded queue"
            );
            state.events.push(PlaybackEvent::QueueDesync {
                engine_index: index,
                queue_length: queue_len,
            });
            return Err(PlaybackError::QueueDesync {
                engine_index: index,
                queue_len,
            });
        }

        let target = match direction {
            Direction::Next => Some(index + 1).filter(|t| *t < queue_len),
            Direction::Previous => index.checked_sub(1),
        };
        let Some(item) = target.and_then(|t| state.loaded.get(t)).cloned() else {
            debug!(?direction, index, "At queue boundary");
            return Ok(());
        };

        let skipped = match direction {
            Direction::Next => self.engine.skip_to_next().await,
            Direction::Previous => self.engine.skip_to_previous().await,
        };
        match skipped {
            Ok(()) => {}
            Err(e) if e.is_rejected() => {
                debug!(?direction, error = %e, "Skip rejected");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        let previous = self.session.current_item().map(|i| i.id);
        let loaded = &state.loaded;
        self.session.update(|session| {
            if session.current_queue != *loaded {
                session.current_queue = loaded.clone();
            }
            session.current_item = Some(item.clone());
        });

        info!(item_id = %item.id, ?direction, "Skipped");
        state.events.push(PlaybackEvent::TrackChanged {
            item_id: item.id,
            previous_item_id: previous,
        });
        Ok(())
    }

    async fn pause_engine(&self, state: &mut ControllerState) -> Result<()> {
        match self.engine.pause().await {
            Ok(()) => {
                debug!("Paused");
                state.events.push(PlaybackEvent::Paused);
                Ok(())
            }
            Err(e) if e.is_rejected() => {
                debug!(error = %e, "Pause rejected");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn resume_engine(&self, state: &mut ControllerState) -> Result<()> {
        match self.engine.play().await {
            Ok(()) => {
                debug!("Resumed");
                state.events.push(PlaybackEvent::Resumed);
                Ok(())
            }
            Err(e) if e.is_rejected() => {
                debug!(error = %e, "Resume rejected");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn seek_engine(&self, state: &mut ControllerState, position: Duration) -> Result<()> {
        match self.engine.seek(position).await {
            Ok(()) => {
                debug!(position_ms = position.as_millis(), "Seeked");
                state.events.push(PlaybackEvent::Seeked {
                    position_ms: u64::try_from(position.as_millis()).unwrap_or(u64::MAX),
                });
                Ok(())
            }
            Err(e) if e.is_rejected() => {
                debug!(error = %e, "Seek rejected");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Wait for the engine to leave buffering
    async fn settle(&self) -> Result<EngineState> {
        let mut rx = self.engine.subscribe_state();
        let timeout = self.config.settle_timeout();

        let waited = tokio::time::timeout(timeout, rx.wait_for(|s| !s.is_transitional()))
            .await
            .map(|settled| settled.map(|state| *state));

        match waited {
            Ok(Ok(state)) => Ok(state),
            // Engine dropped its state sender; fall back to the last reported state
            Ok(Err(_)) => Ok(self.engine.state()),
            Err(_) => {
                warn!(timeout_ms = timeout.as_millis(), "Engine still buffering");
                Err(PlaybackError::EngineBusy(timeout))
            }
        }
    }

    fn load_failed(
        state: &mut ControllerState,
        item: &AudioItem,
        source: EngineError,
    ) -> PlaybackError {
        warn!(item_id = %item.id, error = %source, "Failed to start playback");
        state.events.push(PlaybackEvent::Error {
            message: source.to_string(),
        });
        PlaybackError::EngineLoad {
            item_id: item.id.clone(),
            source,
        }
    }
}

fn index_in(item: &AudioItem, list: &[AudioItem]) -> Result<usize> {
    list.iter()
        .position(|candidate| candidate.same_track(item))
        .ok_or_else(|| PlaybackError::ItemNotInList(item.id.clone()))
}
