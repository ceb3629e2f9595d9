//! Suspension snapshot and restore continuation
//!
//! A priority effect suspends current playback; the snapshot records what
//! was audible so the restore can bring exactly that back.

use serde::{Deserialize, Serialize};

/// Playback state captured when a priority effect begins
///
/// `music_was_playing` honors the user-facing music flag: music that is
/// audible while the flag is off is not recorded, and therefore not
/// resumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Music was enabled and audibly playing
    pub music_was_playing: bool,

    /// The song slot was audibly playing
    pub song_was_playing: bool,
}

/// One-shot continuation that resumes suspended playback
///
/// Handed to the effect's play action by
/// [`AudioCoordinator::play_letter_sound`](crate::AudioCoordinator::play_letter_sound)
/// and redeemed with
/// [`AudioCoordinator::restore`](crate::AudioCoordinator::restore) once the
/// effect completes. The token cannot be cloned, so the restore runs at
/// most once. Dropping it without redeeming leaves playback suspended;
/// [`AudioCoordinator::is_suspended`](crate::AudioCoordinator::is_suspended)
/// exposes that state.
#[derive(Debug)]
#[must_use = "dropping the token leaves playback suspended"]
pub struct RestoreToken {
    snapshot: PlaybackSnapshot,
}

impl RestoreToken {
    pub(crate) fn new(snapshot: PlaybackSnapshot) -> Self {
        Self { snapshot }
    }

    /// The snapshot this token will restore
    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.snapshot
    }

    pub(crate) fn into_snapshot(self) -> PlaybackSnapshot {
        self.snapshot
    }
}
