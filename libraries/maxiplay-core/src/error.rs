/// Core error types for Maxiplay
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Failures reported by the platform file picker
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// User dismissed the picker
    #[error("User cancelled the picker")]
    Cancelled,

    /// No foreground activity to host the picker
    #[error("No activity available to host the picker")]
    NoActivity,

    /// Picker returned without a file
    #[error("No file selected")]
    NoFile,

    /// Any other platform failure
    #[error("Picker failed: {0}")]
    Failed(String),
}

/// Core error type for Maxiplay
#[derive(Error, Debug)]
pub enum CoreError {
    /// Catalog request failed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Entity not found in the catalog
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// File picker failure
    #[error(transparent)]
    Picker(#[from] PickerError),

    /// Permission request failed (distinct from a denial)
    #[error("Permission request failed: {0}")]
    Permission(String),

    /// Upload form did not validate
    #[error("Invalid form: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}
