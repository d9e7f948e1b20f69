//! Grading error types.

use thiserror::Error;
use wg_completion::CompletionError;
use wg_store::StoreError;

/// Errors that abort a grading pass or an assistant request.
#[derive(Debug, Error)]
pub enum GradingError {
    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Nothing was given to grade.
    #[error("no sentences to grade")]
    NothingToGrade,

    /// The selected cell holds no word.
    #[error("cell {0} is empty")]
    EmptyCell(String),

    /// A required text input was blank.
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),
}

/// A grader reply that carries no usable number.
///
/// Never surfaced to callers of a grading pass; see
/// [`crate::score_or_zero`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeParseError {
    #[error("grade reply was empty")]
    Empty,

    #[error("no number in grade reply: {0:?}")]
    NoNumber(String),
}
