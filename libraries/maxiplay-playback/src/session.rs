//! Shared playback session
//!
//! One `SessionStore` per app, readable from any task. Writers publish the
//! new session atomically; subscribers see every change.

use crate::queue::PlaybackQueue;
use maxiplay_core::AudioItem;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// What is playing, what it was chosen from, and how fast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Item the user last chose to play
    pub current_item: Option<AudioItem>,

    /// List `current_item` was chosen from
    pub current_queue: PlaybackQueue,

    /// Rate multiplier
    pub playback_rate: f32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            current_item: None,
            current_queue: PlaybackQueue::default(),
            playback_rate: 1.0,
        }
    }
}

/// Observable holder of the current `Session`
#[derive(Debug)]
pub struct SessionStore {
    tx: watch::Sender<Session>,
}

impl SessionStore {
    /// Create a store holding the default session
    pub fn new() -> Self {
        Self::with_session(Session::default())
    }

    /// Create a store holding `session`
    pub fn with_session(session: Session) -> Self {
        let (tx, _rx) = watch::channel(session);
        Self { tx }
    }

    /// Copy of the current session
    pub fn snapshot(&self) -> Session {
        self.tx.borrow().clone()
    }

    pub fn current_item(&self) -> Option<AudioItem> {
        self.tx.borrow().current_item.clone()
    }

    pub fn playback_rate(&self) -> f32 {
        self.tx.borrow().playback_rate
    }

    /// Whether the stored queue is structurally equal to `items`
    pub fn queue_matches(&self, items: &[AudioItem]) -> bool {
        self.tx.borrow().current_queue.is_same_queue(items)
    }

    /// Receive every future session change
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    pub fn set_current_item(&self, item: Option<AudioItem>) {
        self.tx.send_modify(|s| s.current_item = item);
    }

    pub fn set_current_queue(&self, queue: PlaybackQueue) {
        self.tx.send_modify(|s| s.current_queue = queue);
    }

    pub fn set_playback_rate(&self, rate: f32) {
        self.tx.send_modify(|s| s.playback_rate = rate);
    }

    /// Apply several changes as one update
    ///
    /// Subscribers never observe a half-applied session.
    pub fn update(&self, f: impl FnOnce(&mut Session)) {
        self.tx.send_modify(f);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maxiplay_core::{AudioId, Category, Owner, ProfileId};

    fn item(id: &str) -> AudioItem {
        AudioItem {
            id: AudioId::new(id),
            title: id.to_uppercase(),
            about: String::new(),
            category: Category::Arts,
            file: format!("https://cdn.example.com/{}.mp3", id),
            poster: None,
            owner: Owner {
                id: ProfileId::new("p"),
                name: "P".to_string(),
            },
        }
    }

    #[test]
    fn default_session_is_empty() {
        let store = SessionStore::new();
        let session = store.snapshot();

        assert!(session.current_item.is_none());
        assert!(session.current_queue.is_empty());
        assert_eq!(session.playback_rate, 1.0);
    }

    #[test]
    fn setters_publish_changes() {
        let store = SessionStore::new();
        let rx = store.subscribe();

        store.set_current_queue(PlaybackQueue::new(vec![item("a"), item("b")]));
        store.set_current_item(Some(item("b")));
        store.set_playback_rate(1.5);

        let seen = rx.borrow().clone();
        assert_eq!(seen.current_item.map(|i| i.id), Some(AudioId::new("b")));
        assert!(seen.current_queue.is_same_queue(&[item("a"), item("b")]));
        assert_eq!(seen.playback_rate, 1.5);
        assert!(store.queue_matches(&[item("a"), item("b")]));
    }

    #[tokio::test]
    async fn update_is_a_single_change() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();

        store.update(|s| {
            s.current_queue = PlaybackQueue::new(vec![item("x")]);
            s.current_item = Some(item("x"));
        });

        rx.changed().await.unwrap();
        let seen = rx.borrow_and_update().clone();
        assert_eq!(seen.current_queue.len(), 1);
        assert!(seen.current_item.is_some());
        assert!(!rx.has_changed().unwrap());
    }
}
