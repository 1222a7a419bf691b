//! Files handed back by the platform picker

use serde::{Deserialize, Serialize};

/// Media category a picker is asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Audio file for upload
    Audio,
    /// Poster image
    Photo,
}

impl MediaKind {
    /// MIME pattern the picker filters on
    #[must_use]
    pub fn mime_pattern(&self) -> &'static str {
        match self {
            Self::Audio => "audio/*",
            Self::Photo => "image/*",
        }
    }
}

/// A picked file as described by the platform
///
/// Everything except `uri` is best-effort metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickedFile {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// MIME type
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_copy_uri: Option<String>,
}

impl PickedFile {
    /// Create a file record with only a URI
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Self::default()
        }
    }

    /// Fill metadata the native picker leaves out
    ///
    /// Name falls back to `unknown`, the type to the kind's MIME pattern and the
    /// copy URI to the original URI.
    #[must_use]
    pub fn normalized(mut self, kind: MediaKind) -> Self {
        if self.name.as_deref().filter(|s| !s.is_empty()).is_none() {
            self.name = Some("unknown".to_string());
        }
        if self.mime_type.as_deref().filter(|s| !s.is_empty()).is_none() {
            self.mime_type = Some(kind.mime_pattern().to_string());
        }
        if self.file_copy_uri.is_none() {
            self.file_copy_uri = Some(self.uri.clone());
        }
        self
    }
}
