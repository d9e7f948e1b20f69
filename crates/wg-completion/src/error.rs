//! Completion client error types.

use thiserror::Error;

/// Errors from the text-completion collaborator.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream response body.
        message: String,
    },

    /// No API key configured.
    #[error("completion API key is not configured (set OPENAI_API_KEY)")]
    MissingCredential,

    /// The response body was not JSON.
    #[error("parse error: {0}")]
    Parse(String),
}

impl CompletionError {
    /// Upstream status to forward to a caller, if there is one.
    #[must_use]
    pub const fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
