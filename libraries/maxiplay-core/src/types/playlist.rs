/// Playlist, history and profile records returned by the catalog
use crate::types::{AudioId, AudioItem, PlaylistId, ProfileId};
use serde::{Deserialize, Serialize};

/// Playlist visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

/// Playlist summary (without its audios)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: PlaylistId,
    pub title: String,
    pub items_count: u32,
    pub visibility: Visibility,
}

/// Playlist with its audios resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletePlaylist {
    pub id: PlaylistId,
    pub title: String,
    #[serde(default)]
    pub audios: Vec<AudioItem>,
}

/// One listening-history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryAudio {
    pub audio_id: AudioId,
    pub date: String,
    pub id: String,
    pub title: String,
}

/// Listening history grouped by day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub date: String,
    #[serde(default)]
    pub audios: Vec<HistoryAudio>,
}

/// Public view of a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    pub id: ProfileId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following_count: Option<u32>,
}
