//! Catalog response envelopes
//!
//! The API wraps every payload in a single-key object (`{"audios": [...]}`,
//! `{"playlist": [...]}`, ...). A missing key means "nothing", never an error.

use crate::error::Result;
use crate::traits::Catalog;
use crate::types::{AudioItem, CompletePlaylist, History, Playlist, PublicProfile};
use serde::{Deserialize, Serialize};

/// `{"audios": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudiosEnvelope {
    #[serde(default)]
    pub audios: Vec<AudioItem>,
}

/// `{"playlist": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistsEnvelope {
    #[serde(default)]
    pub playlist: Vec<Playlist>,
}

/// `{"histories": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoriesEnvelope {
    #[serde(default)]
    pub histories: Vec<History>,
}

/// `{"list": {...}}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistAudiosEnvelope {
    #[serde(default)]
    pub list: Option<CompletePlaylist>,
}

/// `{"profile": {...}}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileEnvelope {
    #[serde(default)]
    pub profile: Option<PublicProfile>,
}

/// `{"result": bool}` (is-favorite)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ResultEnvelope {
    #[serde(default)]
    pub result: bool,
}

/// `{"status": bool}` (is-following)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StatusEnvelope {
    #[serde(default)]
    pub status: bool,
}

/// Named audio lists the catalog serves, with their API paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AudioList {
    Latest,
    Recommended,
    Uploads,
    Favorites,
    RecentlyPlayed,
}

impl AudioList {
    /// Every list
    pub const ALL: [AudioList; 5] = [
        AudioList::Latest,
        AudioList::Recommended,
        AudioList::Uploads,
        AudioList::Favorites,
        AudioList::RecentlyPlayed,
    ];

    /// API path serving this list
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Latest => "/audio/latest",
            Self::Recommended => "/profile/recommended",
            Self::Uploads => "/profile/uploads",
            Self::Favorites => "/favorite",
            Self::RecentlyPlayed => "/history/recently-played",
        }
    }

    /// Short name used on the command line and in snapshots
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Recommended => "recommended",
            Self::Uploads => "uploads",
            Self::Favorites => "favorites",
            Self::RecentlyPlayed => "recently-played",
        }
    }

    /// Parse the short name
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == s)
    }

    /// Fetch this list from `catalog`
    pub async fn fetch(self, catalog: &dyn Catalog) -> Result<Vec<AudioItem>> {
        match self {
            Self::Latest => catalog.latest_audios().await,
            Self::Recommended => catalog.recommended_audios().await,
            Self::Uploads => catalog.uploads().await,
            Self::Favorites => catalog.favorites().await,
            Self::RecentlyPlayed => catalog.recently_played().await,
        }
    }
}
