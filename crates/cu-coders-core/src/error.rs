//! Error types for CU-Coders header operations.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or driving the header.
#[derive(Debug, Error)]
pub enum Error {
    /// Collapse breakpoint key is not one of the known screens.
    #[error("Unknown breakpoint: {0}")]
    UnknownBreakpoint(String),

    /// Server answered with a non-success status.
    #[error("Request failed with status code {status}")]
    Http {
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// Request never produced a response (offline, CORS, DNS...).
    #[error("Network Error: {0}")]
    Network(String),

    /// Response body could not be decoded.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Browser refused to change location.
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
