// Rust guideline compliant 2026-10-16

//! Error types for the Scholar core library.
//!
//! Citation graph queries never fail; these errors cover the keyed stores,
//! identifier validation, and configuration loading.

use thiserror::Error;

/// Result type alias for Scholar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Scholar operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file or override is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Identifier does not have a usable format.
    #[error("Invalid ID: {0}")]
    InvalidId(String),

    /// Record not found.
    #[error("Not found: {0}")]
    NotFound(String),
}
