//! Maxiplay Core
//!
//! Platform-agnostic catalog types, upload validation and collaborator traits
//! for Maxiplay.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `AudioItem`, `Playlist`, `History`, `PublicProfile`, `PickedFile`
//! - **Collaborator Traits**: `Catalog`, `FilePicker`, `PermissionGate`
//! - **Upload Form**: validation of new uploads and metadata edits
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! Transport, native pickers and permission prompts live outside this crate and
//! are reached through the traits.
//!
//! # Example
//!
//! ```rust
//! use maxiplay_core::upload::{FormMode, UploadForm};
//! use maxiplay_core::types::{Category, PickedFile};
//!
//! let form = UploadForm {
//!     title: "Morning talk".to_string(),
//!     category: Category::Education.to_string(),
//!     about: "First episode".to_string(),
//!     file: Some(PickedFile {
//!         uri: "content://audio/1".to_string(),
//!         name: Some("talk.mp3".to_string()),
//!         mime_type: Some("audio/mpeg".to_string()),
//!         size: Some(1024),
//!         file_copy_uri: None,
//!     }),
//!     poster: None,
//! };
//!
//! let request = form.validate(FormMode::Create).unwrap();
//! assert_eq!(request.category, Category::Education);
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod picker;
pub mod traits;
pub mod types;
pub mod upload;

// Re-export commonly used types
pub use error::{CoreError, PickerError, Result};
pub use picker::pick_media;
pub use traits::{Catalog, FilePicker, PermissionGate};

pub use types::{
    AudioId, AudioItem, Category, CompletePlaylist, History, HistoryAudio, MediaKind, Owner,
    PickedFile, Playlist, PlaylistId, ProfileId, PublicProfile, Visibility,
};
