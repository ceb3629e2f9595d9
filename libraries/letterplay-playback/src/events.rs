//! Coordination events
//!
//! Event-based communication for UI synchronization. Events are queued
//! by the coordinator and drained by the UI layer each turn:
//! - Music flag changes
//! - Source start/pause transitions
//! - Priority-effect suspension and restore

use crate::types::SourceKind;
use serde::{Deserialize, Serialize};

/// Events emitted by the audio coordinator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// The user-facing music flag changed
    MusicToggled {
        /// New value of the flag
        enabled: bool,
    },

    /// A source slot started playing
    SourceStarted {
        /// Which slot started
        kind: SourceKind,
    },

    /// A source slot was paused
    SourcePaused {
        /// Which slot was paused
        kind: SourceKind,
    },

    /// Both slots were suspended for a priority sound effect
    EffectStarted,

    /// Suspended playback was resumed after a priority sound effect
    PlaybackRestored,
}
