//! Maxiplay CLI Library
//!
//! Headless driver for the playback controller: configuration, a catalog
//! backed by a JSON snapshot, and scripted transport actions.
//!
//! This library exposes the core components for testing purposes.

pub mod config;
pub mod error;
pub mod player;
pub mod snapshot;

// Re-export commonly used types for convenience
pub use config::CliConfig;
pub use error::{CliError, Result};
pub use player::{Action, ListSource, Player, Report};
pub use snapshot::{Snapshot, SnapshotCatalog};
