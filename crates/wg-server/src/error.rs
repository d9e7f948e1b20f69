//! HTTP surface error types.

use serde_json::{Value, json};
use thiserror::Error;
use wg_completion::CompletionError;
use wg_store::StoreError;

/// A request that could not be served. Each variant maps to one status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Not found: {0}")]
    UnknownRoute(String),

    /// Missing or malformed request fields.
    #[error("{0}")]
    Validation(String),

    /// A store operation failed; `action` names it for the 500 message.
    #[error("Failed to {action}: {source}")]
    Store {
        action: &'static str,
        #[source]
        source: StoreError,
    },

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

impl ApiError {
    pub(crate) const fn store(action: &'static str, source: StoreError) -> Self {
        Self::Store { action, source }
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::MethodNotAllowed => 405,
            Self::UnknownRoute(_) => 404,
            Self::Validation(_) => 400,
            Self::Store { source, .. } => match source {
                StoreError::DuplicateTitle(_) | StoreError::Validation(_) => 400,
                StoreError::NotFound(_) => 404,
                StoreError::Io { .. } | StoreError::Json(_) | StoreError::Lock(_) => 500,
            },
            Self::Completion(err) => match err.upstream_status() {
                Some(status) => status,
                None => 500,
            },
        }
    }

    /// Client-facing message. Storage internals are not exposed.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Store { action, source } => match source {
                StoreError::DuplicateTitle(_) => "Puzzle with this title already exists".into(),
                StoreError::NotFound(_) => "Puzzle not found".into(),
                StoreError::Validation(msg) => msg.clone(),
                _ => format!("Failed to {action}"),
            },
            Self::Completion(err) => match err {
                CompletionError::Api { message, .. } => message.clone(),
                CompletionError::MissingCredential => err.to_string(),
                _ => "Error calling OpenAI API".into(),
            },
            other => other.to_string(),
        }
    }

    /// `{ "error": <message> }`
    #[must_use]
    pub fn body(&self) -> Value {
        json!({ "error": self.message() })
    }
}

/// Failures of the listener itself.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {message}")]
    Bind { addr: String, message: String },

    #[error("receive failed: {0}")]
    Recv(#[from] std::io::Error),

    #[error("worker thread failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
