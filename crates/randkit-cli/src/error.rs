//! randkit: harness error types.

use randkit_core::RandomError;
use thiserror::Error;

/// Startup and runtime errors for the sampling harness.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable is invalid or inconsistent with the others.
    #[error("configuration error: {0}")]
    Config(String),

    /// Engine or distribution construction failed.
    #[error("random error: {0}")]
    Random(#[from] RandomError),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the report failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub(crate) fn invalid(key: &str, value: &str, expected: &str) -> Self {
        Self::Config(format!("{key}={value:?} is invalid, expected {expected}"))
    }
}
