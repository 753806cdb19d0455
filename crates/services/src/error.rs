//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while loading a learner record.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LearnerStateError {
    #[error("failed to read learner record {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("learner record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
