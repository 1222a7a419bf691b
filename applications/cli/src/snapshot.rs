/// Catalog served from a JSON snapshot file
///
/// The snapshot stores API payloads under their envelope shape, so a recorded
/// response can be pasted in as-is.
use async_trait::async_trait;
use maxiplay_core::catalog::{AudiosEnvelope, HistoriesEnvelope, PlaylistsEnvelope};
use maxiplay_core::{
    AudioId, AudioItem, Catalog, CompletePlaylist, CoreError, History, Playlist, PlaylistId,
    ProfileId, PublicProfile,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub latest: AudiosEnvelope,
    #[serde(default)]
    pub recommended: AudiosEnvelope,
    #[serde(default)]
    pub uploads: AudiosEnvelope,
    #[serde(default)]
    pub favorites: AudiosEnvelope,
    #[serde(default)]
    pub recently_played: AudiosEnvelope,
    #[serde(default)]
    pub playlists: PlaylistsEnvelope,
    #[serde(default)]
    pub recommended_playlists: PlaylistsEnvelope,
    #[serde(default)]
    pub histories: HistoriesEnvelope,
    #[serde(default)]
    pub profiles: Vec<PublicProfile>,
    /// Uploads of other profiles, keyed by profile id
    #[serde(default)]
    pub public_uploads: HashMap<String, AudiosEnvelope>,
    /// Playlists of other profiles, keyed by profile id
    #[serde(default)]
    pub public_playlists: HashMap<String, PlaylistsEnvelope>,
    #[serde(default)]
    pub playlist_audios: Vec<CompletePlaylist>,
    /// Profiles the signed-in user follows
    #[serde(default)]
    pub following: Vec<ProfileId>,
}

/// `Catalog` over an in-memory `Snapshot`
#[derive(Debug, Clone, Default)]
pub struct SnapshotCatalog {
    snapshot: Snapshot,
}

impl SnapshotCatalog {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Read a snapshot file
    pub fn open(path: &Path) -> maxiplay_core::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&data)?;
        debug!(
            path = %path.display(),
            latest = snapshot.latest.audios.len(),
            playlists = snapshot.playlist_audios.len(),
            "Loaded catalog snapshot"
        );
        Ok(Self::new(snapshot))
    }
}

#[async_trait]
impl Catalog for SnapshotCatalog {
    async fn latest_audios(&self) -> maxiplay_core::Result<Vec<AudioItem>> {
        Ok(self.snapshot.latest.audios.clone())
    }

    async fn recommended_audios(&self) -> maxiplay_core::Result<Vec<AudioItem>> {
        Ok(self.snapshot.recommended.audios.clone())
    }

    async fn playlists(&self) -> maxiplay_core::Result<Vec<Playlist>> {
        Ok(self.snapshot.playlists.playlist.clone())
    }

    async fn uploads(&self) -> maxiplay_core::Result<Vec<AudioItem>> {
        Ok(self.snapshot.uploads.audios.clone())
    }

    async fn favorites(&self) -> maxiplay_core::Result<Vec<AudioItem>> {
        Ok(self.snapshot.favorites.audios.clone())
    }

    async fn histories(&self) -> maxiplay_core::Result<Vec<History>> {
        Ok(self.snapshot.histories.histories.clone())
    }

    async fn recently_played(&self) -> maxiplay_core::Result<Vec<AudioItem>> {
        Ok(self.snapshot.recently_played.audios.clone())
    }

    async fn recommended_playlists(&self) -> maxiplay_core::Result<Vec<Playlist>> {
        Ok(self.snapshot.recommended_playlists.playlist.clone())
    }

    async fn is_favorite(&self, id: &AudioId) -> maxiplay_core::Result<bool> {
        Ok(self.snapshot.favorites.audios.iter().any(|a| &a.id == id))
    }

    async fn public_profile(&self, id: &ProfileId) -> maxiplay_core::Result<PublicProfile> {
        self.snapshot
            .profiles
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Profile", id.as_str()))
    }

    async fn public_uploads(&self, id: &ProfileId) -> maxiplay_core::Result<Vec<AudioItem>> {
        Ok(self
            .snapshot
            .public_uploads
            .get(id.as_str())
            .map(|e| e.audios.clone())
            .unwrap_or_default())
    }

    async fn public_playlists(&self, id: &ProfileId) -> maxiplay_core::Result<Vec<Playlist>> {
        Ok(self
            .snapshot
            .public_playlists
            .get(id.as_str())
            .map(|e| e.playlist.clone())
            .unwrap_or_default())
    }

    async fn playlist_audios(&self, id: &PlaylistId) -> maxiplay_core::Result<CompletePlaylist> {
        self.snapshot
            .playlist_audios
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Playlist", id.as_str()))
    }

    async fn is_following(&self, id: &ProfileId) -> maxiplay_core::Result<bool> {
        Ok(self.snapshot.following.contains(id))
    }
}
