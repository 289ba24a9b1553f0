//! Error types for the inference client.

use thiserror::Error;

/// Result type for inference client operations.
pub type Result<T> = std::result::Result<T, InferenceError>;

/// Inference client errors.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Configuration error (missing endpoint URL, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The endpoint could not be reached, timed out, or answered with a
    /// non-success status
    #[error("Inference endpoint unavailable: {0}")]
    Unavailable(String),

    /// The endpoint answered, but the body was not the expected JSON shape
    #[error("Malformed inference response: {0}")]
    MalformedResponse(String),
}
