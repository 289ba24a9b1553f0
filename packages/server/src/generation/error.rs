//! Caller-facing error taxonomy for the generation pipeline.

use thiserror::Error;

use super::archive::ArchiveError;

/// Errors surfaced to the caller of the orchestrator.
///
/// Upstream provider failures never appear here: the orchestrator absorbs
/// them into the fallback transition. Only storage-layer failures are
/// user-visible.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The archive could not be written or finalized
    #[error("Archive write failed: {0}")]
    ArchiveWriteFailed(#[from] ArchiveError),

    /// Reserved for stricter spec validation; today every field is
    /// defaulted rather than rejected
    #[error("Invalid site spec: {0}")]
    InvalidSpec(String),
}
