//! Crate-level error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the library and the CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// Process rows failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Simulator configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading input or configuration failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input or configuration is not valid JSON for the expected shape.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
