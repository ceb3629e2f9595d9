//! Letterplay Core
//!
//! Shared domain types and error handling for Letterplay.
//!
//! The core crate defines the `Letter` record as stored by the remote
//! entity service, the typed identifier for it, and the unified
//! [`CoreError`] used across the workspace.
//!
//! # Example
//!
//! ```rust
//! use letterplay_core::types::{Letter, UpdateLetter};
//!
//! // A freshly authored letter record (id assigned by the server)
//! let letter = Letter::new("A", "Ahh", "Apple");
//!
//! // A partial update touching only the sound effect
//! let update = UpdateLetter {
//!     sound_effect: Some("https://cdn.example.com/sounds/a.mp3".to_string()),
//!     ..UpdateLetter::default()
//! };
//! assert!(update.letter.is_none());
//! # let _ = (letter, update);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{Letter, LetterId, UpdateLetter};
