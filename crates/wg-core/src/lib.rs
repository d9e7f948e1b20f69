//! # wg-core
//!
//! Core types and pure transformations for wordgrid.
//!
//! This crate provides the foundational pieces shared across all wordgrid crates:
//! - The fixed-size word [`grid::Grid`] with stable per-cell identity
//! - The persisted [`puzzle::Puzzle`] record
//! - Vertical/horizontal sentence derivation from a grid snapshot
//! - Presentation bands for quality scores
//! - Cross-cutting error types

pub mod errors;
pub mod grid;
pub mod puzzle;
pub mod quality;
pub mod sentences;

pub use errors::CoreError;
pub use grid::{CAPACITY, COLS, CellId, Grid, PLACEHOLDER, ROWS};
pub use puzzle::Puzzle;
pub use quality::QualityBand;
pub use sentences::{DerivedSentences, derive, horizontal_sentences, split_sentences, vertical_sentences};
