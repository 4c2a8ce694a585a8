//! Retroboard host — error types.

use retroboard_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the host.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading commands or writing responses failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The engine or its store reported an error.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A response could not be encoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
