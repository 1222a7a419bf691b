//! Playback queue
//!
//! An ordered list of audio items. A queue has no identity of its own: two
//! queues are the same queue when their item ids match position by position.

use maxiplay_core::{AudioId, AudioItem};
use serde::{Deserialize, Serialize};

/// Ordered list of items a track was chosen from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaybackQueue {
    items: Vec<AudioItem>,
}

impl PlaybackQueue {
    /// Create a queue from items
    pub fn new(items: Vec<AudioItem>) -> Self {
        Self { items }
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`
    pub fn get(&self, index: usize) -> Option<&AudioItem> {
        self.items.get(index)
    }

    /// All items in order
    pub fn as_slice(&self) -> &[AudioItem] {
        &self.items
    }

    /// Iterate items in order
    pub fn iter(&self) -> std::slice::Iter<'_, AudioItem> {
        self.items.iter()
    }

    /// Index of the first item with `id`
    pub fn position_of(&self, id: &AudioId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Whether an item with `id` is queued
    pub fn contains(&self, id: &AudioId) -> bool {
        self.position_of(id).is_some()
    }

    /// Item ids in order
    pub fn ids(&self) -> Vec<&AudioId> {
        self.items.iter().map(|item| &item.id).collect()
    }

    /// Structural equality against a candidate list
    ///
    /// Same length and the same id at every position. Titles, locators and
    /// list identity are irrelevant.
    pub fn is_same_queue(&self, candidate: &[AudioItem]) -> bool {
        self.items.len() == candidate.len()
            && self.items.iter().zip(candidate).all(|(a, b)| a.id == b.id)
    }
}

impl PartialEq for PlaybackQueue {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_queue(&other.items)
    }
}

impl Eq for PlaybackQueue {}

impl From<Vec<AudioItem>> for PlaybackQueue {
    fn from(items: Vec<AudioItem>) -> Self {
        Self::new(items)
    }
}

impl From<&[AudioItem]> for PlaybackQueue {
    fn from(items: &[AudioItem]) -> Self {
        Self::new(items.to_vec())
    }
}

impl<'a> IntoIterator for &'a PlaybackQueue {
    type Item = &'a AudioItem;
    type IntoIter = std::slice::Iter<'a, AudioItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
