/// Collaborator traits for Maxiplay
///
/// The application consumes a remote catalog, a platform file picker and a
/// platform permission prompt. None of them is implemented here.
use crate::error::{PickerError, Result};
use crate::types::{
    AudioId, AudioItem, CompletePlaylist, History, MediaKind, PickedFile, Playlist, PlaylistId,
    ProfileId, PublicProfile,
};
use async_trait::async_trait;

/// Remote audio catalog
///
/// Every list query returns an empty list when the server omits the payload.
#[async_trait]
pub trait Catalog: Send + Sync {
    // ========================================================================
    // Signed-in profile
    // ========================================================================

    /// Latest uploads across the platform
    async fn latest_audios(&self) -> Result<Vec<AudioItem>>;

    /// Audios recommended for the signed-in profile
    async fn recommended_audios(&self) -> Result<Vec<AudioItem>>;

    /// Playlists owned by the signed-in profile
    async fn playlists(&self) -> Result<Vec<Playlist>>;

    /// Audios uploaded by the signed-in profile
    async fn uploads(&self) -> Result<Vec<AudioItem>>;

    /// Favorite audios
    async fn favorites(&self) -> Result<Vec<AudioItem>>;

    /// Listening history grouped by day
    async fn histories(&self) -> Result<Vec<History>>;

    /// Recently played audios
    async fn recently_played(&self) -> Result<Vec<AudioItem>>;

    /// Playlists generated from listening habits
    async fn recommended_playlists(&self) -> Result<Vec<Playlist>>;

    /// Whether an audio is in the favorites
    async fn is_favorite(&self, id: &AudioId) -> Result<bool>;

    // ========================================================================
    // Other profiles
    // ========================================================================

    /// Public profile information
    async fn public_profile(&self, id: &ProfileId) -> Result<PublicProfile>;

    /// Public uploads of a profile
    async fn public_uploads(&self, id: &ProfileId) -> Result<Vec<AudioItem>>;

    /// Public playlists of a profile
    async fn public_playlists(&self, id: &ProfileId) -> Result<Vec<Playlist>>;

    /// Audios of a playlist
    async fn playlist_audios(&self, id: &PlaylistId) -> Result<CompletePlaylist>;

    /// Whether the signed-in profile follows `id`
    async fn is_following(&self, id: &ProfileId) -> Result<bool>;
}

/// Platform permission prompt
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PermissionGate: Send + Sync {
    /// Ask for read access to `kind`; `Ok(false)` is a denial
    async fn request(&self, kind: MediaKind) -> Result<bool>;
}

/// Platform file picker
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilePicker: Send + Sync {
    /// Let the user pick one file of `kind`
    async fn pick(&self, kind: MediaKind) -> std::result::Result<PickedFile, PickerError>;
}
