//! In-memory playback engine
//!
//! Keeps a queue, an index and a state signal without producing audio. Every
//! command is recorded so callers can inspect the exact sequence the
//! controller issued.

use crate::engine::{EngineState, EngineTrack, PlaybackEngine};
use crate::error::{EngineError, EngineResult};
use crate::types::EngineOptions;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

/// A command received by `MemoryEngine`
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    Initialize,
    /// Track ids of the new queue
    SetQueue(Vec<String>),
    ResetQueue,
    /// Track ids appended
    AddToQueue(Vec<String>),
    SelectIndex(usize),
    Play,
    Pause,
    Seek(Duration),
    SetRate(f32),
    SkipToNext,
    SkipToPrevious,
}

impl EngineCommand {
    /// Whether this command rebuilds the engine queue
    pub fn touches_queue(&self) -> bool {
        matches!(
            self,
            Self::SetQueue(_) | Self::ResetQueue | Self::AddToQueue(_)
        )
    }
}

#[derive(Debug, Default)]
struct Inner {
    initialized: bool,
    options: Option<EngineOptions>,
    queue: Vec<EngineTrack>,
    index: Option<usize>,
    position: Duration,
    rate: f32,
    failing: HashSet<String>,
    commands: Vec<EngineCommand>,
}

/// Engine that plays nothing and remembers everything
#[derive(Debug)]
pub struct MemoryEngine {
    inner: Mutex<Inner>,
    state: watch::Sender<EngineState>,
}

impl MemoryEngine {
    pub fn new() -> Self {
        let (state, _rx) = watch::channel(EngineState::None);
        Self {
            inner: Mutex::new(Inner {
                rate: 1.0,
                ..Inner::default()
            }),
            state,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, command: EngineCommand) -> MutexGuard<'_, Inner> {
        debug!(?command, "Engine command");
        let mut inner = self.lock();
        inner.commands.push(command);
        inner
    }

    /// Make `select_index` fail for tracks with this locator
    pub fn fail_locator(&self, url: impl Into<String>) {
        self.lock().failing.insert(url.into());
    }

    /// Commands received so far
    pub fn commands(&self) -> Vec<EngineCommand> {
        self.lock().commands.clone()
    }

    /// Forget recorded commands
    pub fn clear_commands(&self) {
        self.lock().commands.clear();
    }

    /// Force the state signal (e.g. simulate buffering)
    pub fn set_state(&self, state: EngineState) {
        self.state.send_replace(state);
    }

    /// Move the playhead as if time had passed
    pub fn set_position(&self, position: Duration) {
        self.lock().position = position;
    }

    /// Move the current index without recording a command
    pub fn force_index(&self, index: Option<usize>) {
        self.lock().index = index;
    }

    pub fn rate(&self) -> f32 {
        self.lock().rate
    }

    pub fn is_initialized(&self) -> bool {
        self.lock().initialized
    }

    /// Options passed to the first `initialize`
    pub fn options(&self) -> Option<EngineOptions> {
        self.lock().options.clone()
    }

    /// Track ids currently queued
    pub fn queued_ids(&self) -> Vec<String> {
        self.lock()
            .queue
            .iter()
            .map(|t| t.id.as_str().to_string())
            .collect()
    }

    fn select(&self, inner: &mut Inner, index: usize) -> EngineResult<()> {
        let track = inner.queue.get(index).ok_or(EngineError::IndexOutOfRange {
            index,
            len: inner.queue.len(),
        })?;

        if inner.failing.contains(&track.url) {
            return Err(EngineError::LoadFailed {
                locator: track.url.clone(),
                reason: "unreachable media".to_string(),
            });
        }

        inner.index = Some(index);
        inner.position = Duration::ZERO;
        if *self.state.borrow() == EngineState::None {
            self.state.send_replace(EngineState::Paused);
        }
        Ok(())
    }
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn ids(tracks: &[EngineTrack]) -> Vec<String> {
    tracks.iter().map(|t| t.id.as_str().to_string()).collect()
}

#[async_trait]
impl PlaybackEngine for MemoryEngine {
    async fn initialize(&self, options: &EngineOptions) -> EngineResult<()> {
        let mut inner = self.record(EngineCommand::Initialize);
        if !inner.initialized {
            inner.initialized = true;
            inner.options = Some(options.clone());
        }
        Ok(())
    }

    async fn set_queue(&self, tracks: Vec<EngineTrack>) -> EngineResult<()> {
        let mut inner = self.record(EngineCommand::SetQueue(ids(&tracks)));
        inner.index = if tracks.is_empty() { None } else { Some(0) };
        inner.queue = tracks;
        inner.position = Duration::ZERO;
        Ok(())
    }

    async fn reset_queue(&self) -> EngineResult<()> {
        let mut inner = self.record(EngineCommand::ResetQueue);
        inner.queue.clear();
        inner.index = None;
        inner.position = Duration::ZERO;
        self.state.send_replace(EngineState::None);
        Ok(())
    }

    async fn add_to_queue(&self, tracks: Vec<EngineTrack>) -> EngineResult<()> {
        let mut inner = self.record(EngineCommand::AddToQueue(ids(&tracks)));
        if inner.index.is_none() && !tracks.is_empty() {
            inner.index = Some(inner.queue.len());
        }
        inner.queue.extend(tracks);
        Ok(())
    }

    async fn select_index(&self, index: usize) -> EngineResult<()> {
        let mut inner = self.record(EngineCommand::SelectIndex(index));
        self.select(&mut inner, index)
    }

    async fn play(&self) -> EngineResult<()> {
        let inner = self.record(EngineCommand::Play);
        if inner.index.is_none() {
            return Err(EngineError::rejected("play with nothing loaded"));
        }
        self.state.send_replace(EngineState::Playing);
        Ok(())
    }

    async fn pause(&self) -> EngineResult<()> {
        let inner = self.record(EngineCommand::Pause);
        if inner.index.is_none() {
            return Err(EngineError::rejected("pause with nothing loaded"));
        }
        self.state.send_replace(EngineState::Paused);
        Ok(())
    }

    async fn seek(&self, position: Duration) -> EngineResult<()> {
        let mut inner = self.record(EngineCommand::Seek(position));
        if inner.index.is_none() {
            return Err(EngineError::rejected("seek with nothing loaded"));
        }
        inner.position = position;
        Ok(())
    }

    async fn set_rate(&self, rate: f32) -> EngineResult<()> {
        let mut inner = self.record(EngineCommand::SetRate(rate));
        inner.rate = rate;
        Ok(())
    }

    async fn position(&self) -> EngineResult<Duration> {
        Ok(self.lock().position)
    }

    async fn current_index(&self) -> EngineResult<Option<usize>> {
        Ok(self.lock().index)
    }

    async fn queue(&self) -> EngineResult<Vec<EngineTrack>> {
        Ok(self.lock().queue.clone())
    }

    fn state(&self) -> EngineState {
        *self.state.borrow()
    }

    fn subscribe_state(&self) -> watch::Receiver<EngineState> {
        self.state.subscribe()
    }

    async fn skip_to_next(&self) -> EngineResult<()> {
        let mut inner = self.record(EngineCommand::SkipToNext);
        let next = inner
            .index
            .map(|i| i + 1)
            .ok_or_else(|| EngineError::rejected("skip with nothing loaded"))?;
        self.select(&mut inner, next)
    }

    async fn skip_to_previous(&self) -> EngineResult<()> {
        let mut inner = self.record(EngineCommand::SkipToPrevious);
        let previous = inner
            .index
            .and_then(|i| i.checked_sub(1))
            .ok_or_else(|| EngineError::rejected("no previous track"))?;
        self.select(&mut inner, previous)
    }
}
