/// Audio catalog types
use crate::types::{AudioId, ProfileId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag attached to every uploaded audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Arts,
    Business,
    Education,
    Entertainment,
    #[serde(rename = "Kids & Family")]
    KidsAndFamily,
    Music,
    Science,
    Tech,
    Others,
}

impl Category {
    /// Every category, in the order the category selector lists them
    pub const ALL: [Category; 9] = [
        Category::Arts,
        Category::Business,
        Category::Education,
        Category::Entertainment,
        Category::KidsAndFamily,
        Category::Music,
        Category::Science,
        Category::Tech,
        Category::Others,
    ];

    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arts => "Arts",
            Self::Business => "Business",
            Self::Education => "Education",
            Self::Entertainment => "Entertainment",
            Self::KidsAndFamily => "Kids & Family",
            Self::Music => "Music",
            Self::Science => "Science",
            Self::Tech => "Tech",
            Self::Others => "Others",
        }
    }

    /// Parse from the wire representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to the profile that uploaded an audio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Owning profile
    pub id: ProfileId,

    /// Display name
    pub name: String,
}

/// An audio record produced by the remote catalog
///
/// Immutable once received. Identity is the `id`; two items with the same id
/// are the same track no matter which list they were fetched from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioItem {
    /// Unique identifier
    pub id: AudioId,

    /// Display title
    pub title: String,

    /// Free-form description
    #[serde(default)]
    pub about: String,

    /// Category tag
    pub category: Category,

    /// Playable media locator (URL or file URI)
    pub file: String,

    /// Artwork locator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,

    /// Owning profile
    pub owner: Owner,
}

impl AudioItem {
    /// Same track as `other`, compared by id only
    pub fn same_track(&self, other: &AudioItem) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_wire_names() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(
            Category::parse("Kids & Family"),
            Some(Category::KidsAndFamily)
        );
        assert_eq!(Category::parse("kids"), None);
    }

    #[test]
    fn audio_item_parses_api_record() {
        let json = r#"{
            "id": "65a1",
            "title": "Morning Talk",
            "about": "Episode 1",
            "category": "Kids & Family",
            "file": "https://cdn.example.com/65a1.mp3",
            "owner": { "id": "u1", "name": "Ada" }
        }"#;

        let item: AudioItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id.as_str(), "65a1");
        assert_eq!(item.category, Category::KidsAndFamily);
        assert_eq!(item.poster, None);
        assert_eq!(item.owner.name, "Ada");
    }

    #[test]
    fn same_track_ignores_everything_but_id() {
        let json =
            r#"{"id":"a","title":"A","category":"Music","file":"f","owner":{"id":"u","name":"n"}}"#;
        let a: AudioItem = serde_json::from_str(json).unwrap();
        let mut renamed = a.clone();
        renamed.title = "Renamed".to_string();

        assert!(a.same_track(&renamed));
    }
}
