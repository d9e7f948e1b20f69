//! Puzzle store error types.

use std::path::PathBuf;

use thiserror::Error;
use wg_core::CoreError;

/// Errors from puzzle collection operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `create` found an existing puzzle with the same title.
    #[error("Puzzle with this title already exists: {0}")]
    DuplicateTitle(String),

    /// No puzzle with this title.
    #[error("Puzzle not found: {0}")]
    NotFound(String),

    /// Incoming record failed shape checks.
    #[error("Invalid puzzle: {0}")]
    Validation(String),

    /// Reading or writing the collection file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The collection file is not a valid puzzle array.
    #[error("Malformed puzzle collection: {0}")]
    Json(#[from] serde_json::Error),

    /// Another writer held the collection lock past the timeout.
    #[error("Write lock unavailable: {0}")]
    Lock(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures of the shared file itself rather than the request.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Json(_) | Self::Lock(_))
    }
}

impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::Validation(msg),
            other => Self::Validation(other.to_string()),
        }
    }
}
