//! The grading pass: one scoring request per derived sentence.

use futures::{StreamExt, TryStreamExt, stream};
use serde::Serialize;
use wg_completion::Completer;
use wg_core::{DerivedSentences, QualityBand};
use wg_store::PuzzleStore;

use crate::error::GradingError;
use crate::parse::{aggregate, parse_grade, score_or_zero};
use crate::prompts::grade_prompt;

/// Score for one sentence. Presentation only; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceGrade {
    pub text: String,
    pub score: f64,
    pub band: QualityBand,
}

/// Result of grading every sentence of a grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    pub vertical: Vec<SentenceGrade>,
    pub horizontal: Vec<SentenceGrade>,
    /// Rounded mean of all sentence scores, vertical and horizontal alike.
    pub quality: f64,
}

impl GradeReport {
    #[must_use]
    pub fn band(&self) -> QualityBand {
        QualityBand::of(self.quality)
    }

    /// Every grade, vertical first.
    pub fn iter(&self) -> impl Iterator<Item = &SentenceGrade> {
        self.vertical.iter().chain(&self.horizontal)
    }
}

/// Runs grading passes against a [`Completer`].
///
/// With `concurrency == 1` requests go out strictly one after another in
/// sentence order. Higher values keep up to that many in flight; results
/// are still reported in sentence order.
pub struct Grader<'a, C> {
    completer: &'a C,
    concurrency: usize,
}

impl<'a, C: Completer> Grader<'a, C> {
    #[must_use]
    pub const fn new(completer: &'a C) -> Self {
        Self {
            completer,
            concurrency: 1,
        }
    }

    /// Set the in-flight limit; `0` is treated as `1`.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Score one sentence. Unparseable or empty replies score 0.
    ///
    /// # Errors
    ///
    /// Returns [`GradingError::Completion`] if the request itself fails.
    pub async fn grade_sentence(&self, index: usize, sentence: &str) -> Result<SentenceGrade, GradingError> {
        let reply = self.completer.complete(&grade_prompt(sentence)).await?;
        let score = match reply {
            Some(text) => score_or_zero(parse_grade(&text)),
            None => {
                tracing::warn!(sentence_index = index, "grader returned no choices, scoring 0");
                0.0
            }
        };
        tracing::debug!(sentence_index = index, score, "sentence graded");
        Ok(SentenceGrade {
            text: sentence.to_string(),
            score,
            band: QualityBand::of(score),
        })
    }

    /// Grade vertical sentences, then horizontal ones, and aggregate.
    ///
    /// The first failed request aborts the pass; later sentences are not sent.
    ///
    /// # Errors
    ///
    /// Returns [`GradingError::NothingToGrade`] for an empty set, or the
    /// first [`GradingError::Completion`].
    pub async fn grade_sentences(&self, sentences: &DerivedSentences) -> Result<GradeReport, GradingError> {
        if sentences.is_empty() {
            return Err(GradingError::NothingToGrade);
        }

        let mut grades: Vec<SentenceGrade> = stream::iter(sentences.iter_all().enumerate())
            .map(|(index, text)| self.grade_sentence(index, text))
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        let scores: Vec<f64> = grades.iter().map(|g| g.score).collect();
        let quality = aggregate(&scores).ok_or(GradingError::NothingToGrade)?;
        let horizontal = grades.split_off(sentences.vertical.len());
        tracing::info!(sentences = scores.len(), quality, "grading pass complete");

        Ok(GradeReport {
            vertical: grades,
            horizontal,
            quality,
        })
    }

    /// Grade and persist the aggregate as the puzzle's quality.
    ///
    /// Nothing is written if any request fails.
    ///
    /// # Errors
    ///
    /// Returns the grading error, or [`GradingError::Store`] if the puzzle
    /// does not exist or the write fails.
    pub async fn grade_puzzle(
        &self,
        store: &PuzzleStore,
        title: &str,
        sentences: &DerivedSentences,
    ) -> Result<GradeReport, GradingError> {
        let report = self.grade_sentences(sentences).await?;
        store.update_quality(title, report.quality).await?;
        Ok(report)
    }
}
