/// Letter domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter identifier (assigned by the remote entity service)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterId(String);

impl LetterId {
    /// Create a new letter ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LetterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LetterId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A letter record from the remote entity store
///
/// One record per alphabet letter, holding the display glyph, its spoken
/// name, an example word, and the media assets used when teaching it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Letter {
    /// Unique record identifier
    pub id: LetterId,

    /// The letter glyph (e.g. "A")
    pub letter: String,

    /// Spoken name of the letter
    pub name: String,

    /// Example word starting with the letter
    pub word: String,

    /// Icon asset for the example word
    pub icon: Option<String>,

    /// URL of the letter's pronunciation sound effect
    pub sound_effect: Option<String>,

    /// SVG path data for the letter tracing animation
    pub writing_path: Option<String>,

    /// When the record was created (server-side)
    pub created_date: Option<DateTime<Utc>>,

    /// When the record was last updated (server-side)
    pub updated_date: Option<DateTime<Utc>>,
}

impl Letter {
    /// Create a new letter with minimal fields
    ///
    /// The id is empty until the server assigns one.
    pub fn new(
        letter: impl Into<String>,
        name: impl Into<String>,
        word: impl Into<String>,
    ) -> Self {
        Self {
            id: LetterId::new(""),
            letter: letter.into(),
            name: name.into(),
            word: word.into(),
            icon: None,
            sound_effect: None,
            writing_path: None,
            created_date: None,
            updated_date: None,
        }
    }

    /// Check whether the record has a playable pronunciation asset
    pub fn has_sound_effect(&self) -> bool {
        self.sound_effect.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Data for updating a letter (all fields optional)
///
/// Serializes only the fields that are set, so a PUT body carries just
/// the changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLetter {
    /// New letter glyph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,

    /// New spoken name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New example word
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,

    /// New icon asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// New pronunciation sound effect URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_effect: Option<String>,

    /// New tracing path data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writing_path: Option<String>,
}

impl UpdateLetter {
    /// Check whether the update carries any change at all
    pub fn is_empty(&self) -> bool {
        self.letter.is_none()
            && self.name.is_none()
            && self.word.is_none()
            && self.icon.is_none()
            && self.sound_effect.is_none()
            && self.writing_path.is_none()
    }
}
