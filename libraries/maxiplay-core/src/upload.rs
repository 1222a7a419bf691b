//! Audio upload form
//!
//! Validates what the user typed and picked, then assembles the multipart
//! fields the upload endpoint expects. Every failing field is reported at once.

use crate::error::{CoreError, Result};
use crate::types::{Category, PickedFile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const TITLE_MISSING: &str = "Title is missing!";
const CATEGORY_MISSING: &str = "Category is missing!";
const ABOUT_MISSING: &str = "About is missing!";
const FILE_MISSING: &str = "Audio file is missing!";

const DEFAULT_POSTER_MIME: &str = "image/jpeg";
const DEFAULT_AUDIO_MIME: &str = "audio/mpeg";

/// Whether the form creates a new audio or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMode {
    /// New upload, audio file required
    Create,
    /// Metadata edit, audio file ignored
    Update,
}

/// Raw form state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadForm {
    pub title: String,
    /// Category as selected (wire name)
    pub category: String,
    pub about: String,
    pub file: Option<PickedFile>,
    pub poster: Option<PickedFile>,
}

/// One file part of the multipart body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePart {
    pub uri: String,
    pub mime_type: String,
    pub name: String,
}

/// Validated upload, ready to be encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRequest {
    pub title: String,
    pub about: String,
    pub category: Category,
    pub poster: Option<FilePart>,
    /// Only present for [`FormMode::Create`]
    pub file: Option<FilePart>,
}

impl UploadRequest {
    /// Text fields in submission order
    pub fn text_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("title", self.title.as_str()),
            ("about", self.about.as_str()),
            ("category", self.category.as_str()),
        ]
    }
}

impl UploadForm {
    /// Form pre-filled from an existing audio, for editing
    pub fn for_update(
        title: impl Into<String>,
        category: Category,
        about: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.as_str().to_string(),
            about: about.into(),
            file: None,
            poster: None,
        }
    }

    /// Validate with the current time used for generated file names
    pub fn validate(&self, mode: FormMode) -> Result<UploadRequest> {
        self.validate_at(mode, Utc::now())
    }

    /// Validate, naming unnamed parts after `now`
    pub fn validate_at(&self, mode: FormMode, now: DateTime<Utc>) -> Result<UploadRequest> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push(TITLE_MISSING.to_string());
        }

        let category = Category::parse(&self.category);
        if category.is_none() {
            errors.push(CATEGORY_MISSING.to_string());
        }

        let about = self.about.trim();
        if about.is_empty() {
            errors.push(ABOUT_MISSING.to_string());
        }

        if mode == FormMode::Create && !self.file.as_ref().is_some_and(is_complete_audio) {
            errors.push(FILE_MISSING.to_string());
        }

        let Some(category) = category.filter(|_| errors.is_empty()) else {
            return Err(CoreError::Validation(errors));
        };

        let millis = now.timestamp_millis();

        let poster = self
            .poster
            .as_ref()
            .filter(|p| !p.uri.is_empty())
            .map(|p| FilePart {
                uri: p.uri.clone(),
                mime_type: non_empty(p.mime_type.as_deref())
                    .unwrap_or(DEFAULT_POSTER_MIME)
                    .to_string(),
                name: non_empty(p.name.as_deref())
                    .map_or_else(|| format!("poster-{millis}.jpg"), str::to_string),
            });

        let file = match mode {
            FormMode::Update => None,
            FormMode::Create => self.file.as_ref().map(|f| FilePart {
                uri: f.uri.clone(),
                mime_type: non_empty(f.mime_type.as_deref())
                    .unwrap_or(DEFAULT_AUDIO_MIME)
                    .to_string(),
                name: non_empty(f.name.as_deref())
                    .map_or_else(|| format!("audio-{millis}.mp3"), str::to_string),
            }),
        };

        Ok(UploadRequest {
            title: title.to_string(),
            about: about.to_string(),
            category,
            poster,
            file,
        })
    }
}

fn is_complete_audio(file: &PickedFile) -> bool {
    !file.uri.is_empty()
        && non_empty(file.name.as_deref()).is_some()
        && non_empty(file.mime_type.as_deref()).is_some()
        && file.size.is_some()
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn audio_file() -> PickedFile {
        PickedFile {
            uri: "content://audio/1".to_string(),
            name: Some("talk.mp3".to_string()),
            mime_type: Some("audio/*".to_string()),
            size: Some(3_000_000),
            file_copy_uri: None,
        }
    }

    fn filled_form() -> UploadForm {
        UploadForm {
            title: "  Morning talk ".to_string(),
            category: "Education".to_string(),
            about: "First episode".to_string(),
            file: Some(audio_file()),
            poster: None,
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    #[test]
    fn empty_form_reports_every_missing_field() {
        let err = UploadForm::default()
            .validate_at(FormMode::Create, at())
            .unwrap_err();

        let CoreError::Validation(messages) = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            messages,
            vec![TITLE_MISSING, CATEGORY_MISSING, ABOUT_MISSING, FILE_MISSING]
        );
    }

    #[test]
    fn whitespace_only_title_is_missing() {
        let mut form = filled_form();
        form.title = "   ".to_string();

        let err = form.validate_at(FormMode::Create, at()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(m) if m == vec![TITLE_MISSING]));
    }

    #[test]
    fn unknown_category_is_missing() {
        let mut form = filled_form();
        form.category = "Podcasts".to_string();

        let err = form.validate_at(FormMode::Create, at()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(m) if m == vec![CATEGORY_MISSING]));
    }

    #[test]
    fn incomplete_audio_file_is_missing() {
        let mut form = filled_form();
        form.file = Some(PickedFile::new("content://audio/1"));

        let err = form.validate_at(FormMode::Create, at()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(m) if m == vec![FILE_MISSING]));
    }

    #[test]
    fn create_produces_trimmed_fields_and_audio_part() {
        let request = filled_form().validate_at(FormMode::Create, at()).unwrap();

        assert_eq!(request.title, "Morning talk");
        assert_eq!(request.category, Category::Education);
        assert_eq!(
            request.file,
            Some(FilePart {
                uri: "content://audio/1".to_string(),
                mime_type: "audio/*".to_string(),
                name: "talk.mp3".to_string(),
            })
        );
        assert!(request.poster.is_none());
        assert_eq!(
            request.text_fields(),
            [
                ("title", "Morning talk"),
                ("about", "First episode"),
                ("category", "Education")
            ]
        );
    }

    #[test]
    fn poster_defaults_name_and_mime() {
        let mut form = filled_form();
        form.poster = Some(PickedFile::new("file:///cover"));

        let request = form.validate_at(FormMode::Create, at()).unwrap();
        let poster = request.poster.unwrap();

        assert_eq!(poster.mime_type, "image/jpeg");
        assert_eq!(poster.name, "poster-1700000000000.jpg");
    }

    #[test]
    fn update_ignores_audio_file() {
        let form = UploadForm::for_update("Edited", Category::Music, "Notes");

        let request = form.validate_at(FormMode::Update, at()).unwrap();
        assert!(request.file.is_none());
        assert_eq!(request.category, Category::Music);
    }
}
