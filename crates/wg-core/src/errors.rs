//! Cross-cutting error types for wordgrid.
//!
//! Domain-specific errors (e.g., `StoreError`, `CompletionError`) live in
//! their respective crates. They converge into `anyhow` in `wg-cli`.

use thiserror::Error;

/// Errors that can be raised by any wordgrid crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A cell address fell outside the fixed grid.
    #[error("Cell out of bounds: row {row}, col {col} (grid is {rows}x{cols})")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Data failed validation (shape, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
