//! # wg-grading
//!
//! Quality scoring for word-grid puzzles.
//!
//! A grading pass sends every derived sentence (vertical set, then
//! horizontal set) to the completion API with a fixed rubric, parses each
//! reply into a 0-100 score, and averages all scores into one rounded
//! quality value. Only that aggregate is persisted.
//!
//! Parse failures are modelled as [`GradeParseError`] and turned into a
//! zero score by [`score_or_zero`]; transport and API failures abort the
//! pass.

mod assistant;
mod error;
mod grader;
mod parse;
mod prompts;

pub use assistant::WordAssistant;
pub use error::{GradeParseError, GradingError};
pub use grader::{GradeReport, Grader, SentenceGrade};
pub use parse::{aggregate, parse_grade, parse_synonyms, score_or_zero};
pub use prompts::{analysis_prompt, grade_prompt, synonyms_prompt};
