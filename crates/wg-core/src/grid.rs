//! Fixed-size word grid with stable per-cell identity.
//!
//! The grid is always `ROWS x COLS`. Every cell holds a value at all times;
//! an empty cell is the empty string, never absent. Values are trimmed on
//! entry so derivation and persistence see the same text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Number of grid rows (words per vertical sentence).
pub const ROWS: usize = 5;

/// Number of grid columns (vertical sentences per grid).
pub const COLS: usize = 3;

/// Total number of cells, and the required length of `Puzzle::words`.
pub const CAPACITY: usize = ROWS * COLS;

/// Stand-in token for an empty cell or an empty grid.
pub const PLACEHOLDER: &str = "____";

// ---------------------------------------------------------------------------
// CellId
// ---------------------------------------------------------------------------

/// Stable `(row, col)` address of a grid cell.
///
/// Always in bounds: construction and deserialization both go through
/// [`CellId::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCellId")]
pub struct CellId {
    row: usize,
    col: usize,
}

/// Unchecked wire form of a [`CellId`].
#[derive(Deserialize)]
struct RawCellId {
    row: usize,
    col: usize,
}

impl TryFrom<RawCellId> for CellId {
    type Error = CoreError;

    fn try_from(raw: RawCellId) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.col)
    }
}

impl CellId {
    /// Build a checked cell address.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::CellOutOfBounds`] if `row >= ROWS` or `col >= COLS`.
    pub const fn new(row: usize, col: usize) -> Result<Self, CoreError> {
        if row >= ROWS || col >= COLS {
            return Err(CoreError::CellOutOfBounds {
                row,
                col,
                rows: ROWS,
                cols: COLS,
            });
        }
        Ok(Self { row, col })
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Row-major position of this cell within `Puzzle::words`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * COLS + self.col
    }

    /// Inverse of [`CellId::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= CAPACITY {
            return None;
        }
        Some(Self {
            row: index / COLS,
            col: index % COLS,
        })
    }

    /// All cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CAPACITY).filter_map(Self::from_index)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell-{}-{}", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// In-memory `ROWS x COLS` matrix of cell values, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<String>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// An all-empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![String::new(); CAPACITY],
        }
    }

    /// Build a grid from a persisted word list.
    ///
    /// Position `i` fills cell `i` in row-major order. Missing positions
    /// become empty cells and surplus positions are ignored.
    #[must_use]
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut grid = Self::new();
        for (cell, word) in grid.cells.iter_mut().zip(words) {
            *cell = word.as_ref().trim().to_string();
        }
        grid
    }

    #[must_use]
    pub fn get(&self, cell: CellId) -> &str {
        &self.cells[cell.index()]
    }

    /// Replace a cell value (last value wins). Returns the previous value.
    pub fn set(&mut self, cell: CellId, value: &str) -> String {
        std::mem::replace(&mut self.cells[cell.index()], value.trim().to_string())
    }

    /// Reset every cell to the empty string.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Whether every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(String::is_empty)
    }

    /// Row-major snapshot of all cell values (length [`CAPACITY`]).
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        self.cells.clone()
    }

    /// Row-major view of all cell values.
    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Values of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &str> {
        self.cells
            .iter()
            .skip(row * COLS)
            .take(if row < ROWS { COLS } else { 0 })
            .map(String::as_str)
    }

    /// Values of one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> {
        self.cells
            .iter()
            .skip(col)
            .step_by(COLS)
            .take(if col < COLS { ROWS } else { 0 })
            .map(String::as_str)
    }

    /// Raw row text, cells joined by a single space (no substitution).
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.row(row).collect::<Vec<_>>().join(" ")
    }

    /// Raw column text, cells joined by a single space (no substitution).
    #[must_use]
    pub fn column_text(&self, col: usize) -> String {
        self.column(col).collect::<Vec<_>>().join(" ")
    }
}
