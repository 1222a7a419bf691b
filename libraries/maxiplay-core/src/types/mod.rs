mod audio;
mod file;
mod ids;
mod playlist;

pub use audio::{AudioItem, Category, Owner};
pub use file::{MediaKind, PickedFile};
pub use ids::{AudioId, PlaylistId, ProfileId};
pub use playlist::{CompletePlaylist, History, HistoryAudio, Playlist, PublicProfile, Visibility};
