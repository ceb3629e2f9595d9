//! Letterplay - Audio Coordination
//!
//! Platform-agnostic audio coordination for Letterplay.
//!
//! This crate provides:
//! - The user-togglable background-music flag
//! - Mutual exclusion between the music and song slots (never both audible)
//! - Priority-effect suspension with snapshot-based restore
//! - An event queue for UI synchronization
//!
//! # Architecture
//!
//! `letterplay-playback` is completely platform-agnostic:
//! - No dependency on any audio backend
//! - No dependency on the UI framework
//! - No network or storage access
//!
//! The surrounding UI layer implements [`PlaybackSource`] over its real
//! audio elements and injects one handle per slot. One
//! [`AudioCoordinator`] exists per running UI session; descendant
//! components reach playback state through it rather than through
//! ambient globals.
//!
//! # Example: Mutual Exclusion
//!
//! ```rust
//! use letterplay_playback::{AudioCoordinator, PlaybackSource, SourceKind};
//!
//! struct StubSource {
//!     paused: bool,
//! }
//!
//! impl PlaybackSource for StubSource {
//!     fn play(&mut self) {
//!         self.paused = false;
//!     }
//!     fn pause(&mut self) {
//!         self.paused = true;
//!     }
//!     fn is_paused(&self) -> bool {
//!         self.paused
//!     }
//! }
//!
//! let mut coordinator = AudioCoordinator::with_defaults(
//!     Box::new(StubSource { paused: true }),
//!     Box::new(StubSource { paused: true }),
//! );
//!
//! // Start the background music
//! coordinator.manage_playback(SourceKind::Music);
//! assert!(!coordinator.is_paused(SourceKind::Music));
//!
//! // Starting the song pauses the music
//! coordinator.manage_playback(SourceKind::Song);
//! assert!(coordinator.is_paused(SourceKind::Music));
//! assert!(!coordinator.is_paused(SourceKind::Song));
//! ```
//!
//! # Example: Priority Sound Effect
//!
//! ```rust
//! # use letterplay_playback::{AudioCoordinator, PlaybackSource, SourceKind};
//! # struct StubSource { paused: bool }
//! # impl PlaybackSource for StubSource {
//! #     fn play(&mut self) { self.paused = false; }
//! #     fn pause(&mut self) { self.paused = true; }
//! #     fn is_paused(&self) -> bool { self.paused }
//! # }
//! let mut coordinator = AudioCoordinator::with_defaults(
//!     Box::new(StubSource { paused: false }),
//!     Box::new(StubSource { paused: true }),
//! );
//!
//! // Suspend playback while the letter's pronunciation plays
//! let mut pending_restore = None;
//! coordinator.play_letter_sound(|token| pending_restore = Some(token))?;
//! assert!(coordinator.is_paused(SourceKind::Music));
//! assert!(coordinator.is_suspended());
//!
//! // Later, on the effect's "ended" event:
//! coordinator.restore(pending_restore.take().expect("token held by caller"));
//! assert!(!coordinator.is_paused(SourceKind::Music));
//! # Ok::<(), letterplay_playback::PlaybackError>(())
//! ```

mod coordinator;
mod error;
mod events;
mod restore;
mod source;
pub mod types;

// Public exports
pub use coordinator::AudioCoordinator;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use restore::{PlaybackSnapshot, RestoreToken};
pub use source::PlaybackSource;
pub use types::{CoordinatorConfig, SourceKind};
