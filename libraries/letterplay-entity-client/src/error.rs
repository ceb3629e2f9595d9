//! Error types for the entity store client.

use thiserror::Error;

/// Errors that can occur when interacting with the remote entity store.
#[derive(Error, Debug)]
pub enum EntityClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service rejected the API key
    #[error("API key rejected by the entity store")]
    AuthRejected,

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity type name (e.g. "Letter")
        entity: String,
        /// Identifier the service could not resolve
        id: String,
    },

    /// The service returned an error response
    #[error("Entity store error ({status}): {message}")]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        message: String,
    },

    /// Failed to parse a service response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid service URL
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    /// The service is offline or unreachable
    #[error("Entity store unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for entity store operations.
pub type Result<T> = std::result::Result<T, EntityClientError>;
