/// Core error types for Letterplay
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Letterplay
#[derive(Error, Debug)]
pub enum CoreError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity type name (e.g. "Letter")
        entity: String,
        /// Identifier that failed to resolve
        id: String,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
