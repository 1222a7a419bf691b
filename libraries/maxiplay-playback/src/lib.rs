//! Maxiplay - Playback Control
//!
//! Platform-agnostic playback session management for Maxiplay.
//!
//! This crate provides:
//! - The playback engine contract (`PlaybackEngine`)
//! - The shared session store (current item, queue, playback rate)
//! - The playback controller: first play, same-track toggle, track switch
//!   with structural queue comparison, next/previous, seek and skip
//! - Playback events for UI synchronization
//! - An in-memory engine for headless use and tests
//!
//! # Architecture
//!
//! `maxiplay-playback` does not decode or output audio. The platform media
//! player is injected as an `Arc<dyn PlaybackEngine>`; the controller owns
//! the queue it loaded into that engine and trusts only the engine's index.
//!
//! # Example
//!
//! ```rust
//! use maxiplay_core::{AudioId, AudioItem, Category, Owner, ProfileId};
//! use maxiplay_playback::{MemoryEngine, PlaybackConfig, PlaybackController, SessionStore};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let item = |id: &str| AudioItem {
//!     id: AudioId::new(id),
//!     title: id.to_string(),
//!     about: String::new(),
//!     category: Category::Music,
//!     file: format!("https://cdn.example.com/{id}.mp3"),
//!     poster: None,
//!     owner: Owner { id: ProfileId::new("p1"), name: "Host".to_string() },
//! };
//! let list = vec![item("a"), item("b"), item("c")];
//!
//! let session = Arc::new(SessionStore::new());
//! let controller = PlaybackController::new(
//!     Arc::new(MemoryEngine::new()),
//!     session.clone(),
//!     PlaybackConfig::default(),
//! )
//! .unwrap();
//!
//! controller.on_audio_press(&list[1], &list).await.unwrap();
//! assert_eq!(session.current_item().unwrap().id.as_str(), "b");
//!
//! controller.on_next_press().await.unwrap();
//! assert_eq!(session.current_item().unwrap().id.as_str(), "c");
//! # }
//! ```

#![forbid(unsafe_code)]

mod controller;
pub mod engine;
mod error;
pub mod events;
pub mod memory;
mod queue;
pub mod session;
pub mod types;

// Public exports
pub use controller::PlaybackController;
pub use engine::{EngineState, EngineTrack, PlaybackEngine};
pub use error::{EngineError, EngineResult, PlaybackError, Result};
pub use events::PlaybackEvent;
pub use memory::{EngineCommand, MemoryEngine};
pub use queue::PlaybackQueue;
pub use session::{Session, SessionStore};
pub use types::{EngineOptions, Phase, PlaybackConfig, PlayerStatus};
