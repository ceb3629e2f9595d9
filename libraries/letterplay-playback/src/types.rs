//! Core types for audio coordination

use serde::{Deserialize, Serialize};

/// The two source slots managed by the coordinator
///
/// `Music` is the looping background track; `Song` is the transient
/// track played once per trigger. The coordinator only ever manages
/// these two slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    /// Looping background music
    Music,

    /// One-shot song track
    Song,
}

impl SourceKind {
    /// The other slot (the secondary in a mutual-exclusion pair)
    pub fn other(self) -> Self {
        match self {
            SourceKind::Music => SourceKind::Song,
            SourceKind::Song => SourceKind::Music,
        }
    }
}

/// Configuration for the audio coordinator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    /// Whether background music starts enabled (default: true)
    pub music_enabled: bool,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            music_enabled: true,
        }
    }
}
