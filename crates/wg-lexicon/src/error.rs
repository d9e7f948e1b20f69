//! Lexicon error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    /// The lexicon file could not be opened.
    #[error("failed to open lexicon {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV header or framing is malformed.
    #[error("malformed lexicon table: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row.
    #[error("lexicon header is missing column '{0}'")]
    MissingColumn(&'static str),
}
