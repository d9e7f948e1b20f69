//! Word-level help: synonyms, in-context analysis, free-form questions.

use wg_completion::Completer;
use wg_core::{CellId, Grid};

use crate::error::GradingError;
use crate::parse::parse_synonyms;
use crate::prompts::{analysis_prompt, synonyms_prompt};

pub struct WordAssistant<'a, C> {
    completer: &'a C,
}

impl<'a, C: Completer> WordAssistant<'a, C> {
    #[must_use]
    pub const fn new(completer: &'a C) -> Self {
        Self { completer }
    }

    /// Up to ten synonyms; empty if the API returned no choices.
    ///
    /// # Errors
    ///
    /// Returns [`GradingError::EmptyInput`] for a blank word, or the
    /// completion error.
    pub async fn synonyms(&self, word: &str) -> Result<Vec<String>, GradingError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(GradingError::EmptyInput("word"));
        }
        let reply = self.completer.complete(&synonyms_prompt(word)).await?;
        Ok(reply.as_deref().map(parse_synonyms).unwrap_or_default())
    }

    /// Analysis of the word in `cell`, using its column and row as context.
    ///
    /// # Errors
    ///
    /// Returns [`GradingError::EmptyCell`] if the cell is empty, or the
    /// completion error.
    pub async fn analyze(&self, grid: &Grid, cell: CellId) -> Result<Option<String>, GradingError> {
        let word = grid.get(cell).trim();
        if word.is_empty() {
            return Err(GradingError::EmptyCell(cell.to_string()));
        }
        let vertical = grid.column_text(cell.col());
        let horizontal = grid.row_text(cell.row());
        let prompt = analysis_prompt(word, vertical.trim(), horizontal.trim());
        tracing::debug!(%cell, "requesting word analysis");
        Ok(self.completer.complete(&prompt).await?)
    }

    /// Pass a free-form question straight through.
    ///
    /// # Errors
    ///
    /// Returns [`GradingError::EmptyInput`] for a blank question, or the
    /// completion error.
    pub async fn ask(&self, question: &str) -> Result<Option<String>, GradingError> {
        if question.trim().is_empty() {
            return Err(GradingError::EmptyInput("question"));
        }
        Ok(self.completer.complete(question).await?)
    }
}
