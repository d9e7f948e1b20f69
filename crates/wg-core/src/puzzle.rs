//! The persisted puzzle record.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CoreError;
use crate::grid::{CAPACITY, Grid};
use crate::quality::QualityBand;

/// A word-grid puzzle as stored in the shared collection.
///
/// `title` is the unique key. `words` is row-major with exactly
/// [`CAPACITY`] entries; empty cells are `""`. Fields this version does not
/// know about are kept in `extra` so a rewrite never drops them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Puzzle {
    pub title: String,
    pub words: Vec<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_quality"
    )]
    #[schemars(with = "Option<f64>")]
    pub quality: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Puzzle {
    /// A new puzzle with an all-empty grid and no quality yet.
    #[must_use]
    pub fn blank(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            words: vec![String::new(); CAPACITY],
            quality: None,
            extra: Map::new(),
        }
    }

    /// Snapshot a grid into a puzzle record.
    #[must_use]
    pub fn from_grid(title: impl Into<String>, grid: &Grid) -> Self {
        Self {
            title: title.into(),
            words: grid.words(),
            quality: None,
            extra: Map::new(),
        }
    }

    /// Load this puzzle's words into a grid.
    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::from_words(&self.words)
    }

    #[must_use]
    pub fn band(&self) -> Option<QualityBand> {
        self.quality.map(QualityBand::of)
    }

    /// Check the record invariants: non-empty title, fixed word count,
    /// quality within `[0, 100]`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] describing the first violation.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_title(&self.title)?;
        validate_words(&self.words)?;
        if let Some(quality) = self.quality {
            validate_quality(quality)?;
        }
        Ok(())
    }
}

/// Whole scores are written as integers (`70`, not `70.0`).
#[allow(clippy::ref_option, clippy::cast_possible_truncation, clippy::float_cmp)]
fn serialize_quality<S: serde::Serializer>(
    quality: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match *quality {
        Some(q) if q.fract() == 0.0 && q.abs() <= 1e15 => serializer.serialize_some(&(q as i64)),
        Some(q) => serializer.serialize_some(&q),
        None => serializer.serialize_none(),
    }
}

/// # Errors
///
/// Returns [`CoreError::Validation`] if the title is empty or blank.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    Ok(())
}

/// # Errors
///
/// Returns [`CoreError::Validation`] if `words.len() != CAPACITY`.
pub fn validate_words(words: &[String]) -> Result<(), CoreError> {
    if words.len() != CAPACITY {
        return Err(CoreError::Validation(format!(
            "words must have exactly {CAPACITY} entries, got {}",
            words.len()
        )));
    }
    Ok(())
}

/// # Errors
///
/// Returns [`CoreError::Validation`] if `quality` is not a finite number in `[0, 100]`.
pub fn validate_quality(quality: f64) -> Result<(), CoreError> {
    if !quality.is_finite() || !(0.0..=100.0).contains(&quality) {
        return Err(CoreError::Validation(format!(
            "quality must be a number between 0 and 100, got {quality}"
        )));
    }
    Ok(())
}
