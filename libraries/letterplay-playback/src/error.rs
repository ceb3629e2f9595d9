//! Error types for audio coordination

use thiserror::Error;

/// Audio coordination errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    /// A priority effect is already suspended and has not been restored yet
    #[error("A priority sound effect is already in progress")]
    EffectInProgress,
}

/// Result type for coordination operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
