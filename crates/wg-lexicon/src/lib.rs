//! # wg-lexicon
//!
//! Maps grid words to part-of-speech, frequency, and inflection metadata
//! loaded once from a CSV table (`LEMMA,POS,FREQUENCY,INFLECTIONS`).
//!
//! Lookup cleans the word (see [`clean_word`]), then matches the lemma
//! column case-insensitively. If no lemma matches, entries whose
//! comma-separated inflections contain the word are tried. In both phases
//! the first row in file order wins, so duplicate lemmas or inflections
//! shared by several lemmas resolve deterministically.

mod entry;
mod error;

pub use entry::{LexiconEntry, PartOfSpeech, UNKNOWN, WordDetails};
pub use error::LexiconError;

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

/// Punctuation stripped from both ends of a word before lookup.
const EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '(', ')'];

/// Strip surrounding whitespace, then one leading and one trailing run of
/// `.,!?;:()`. Interior punctuation is kept.
#[must_use]
pub fn clean_word(word: &str) -> &str {
    word.trim()
        .trim_start_matches(EDGE_PUNCTUATION)
        .trim_end_matches(EDGE_PUNCTUATION)
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "LEMMA")]
    lemma: String,
    #[serde(rename = "POS", default)]
    pos: String,
    #[serde(rename = "FREQUENCY", default, deserialize_with = "csv::invalid_option")]
    frequency: Option<f64>,
    #[serde(rename = "INFLECTIONS", default)]
    inflections: String,
}

/// Immutable in-memory lexicon snapshot.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    by_lemma: HashMap<String, usize>,
    by_inflection: HashMap<String, usize>,
}

impl Lexicon {
    /// An empty lexicon; every lookup misses.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a lexicon from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Io`] if the file cannot be opened, or a CSV
    /// error if the header row is unusable. Individual bad rows are skipped.
    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let file = std::fs::File::open(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_reader(file)?;
        tracing::debug!(path = %path.display(), entries = lexicon.len(), "lexicon loaded");
        Ok(lexicon)
    }

    /// Load a lexicon from any CSV source with a header row.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] if the header row is missing a required column.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LexiconError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if !headers.iter().any(|h| h == "LEMMA") {
            return Err(LexiconError::MissingColumn("LEMMA"));
        }

        let mut entries = Vec::new();
        for (row_idx, result) in rdr.deserialize::<RawRow>().enumerate() {
            let row = match result {
                Ok(row) => row,
                Err(error) => {
                    tracing::warn!(row = row_idx + 2, %error, "skipping malformed lexicon row");
                    continue;
                }
            };
            if row.lemma.is_empty() {
                continue;
            }
            entries.push(LexiconEntry {
                lemma: row.lemma,
                pos: PartOfSpeech::from_code(&row.pos),
                frequency: row.frequency.unwrap_or(0.0),
                inflections: split_inflections(&row.inflections),
            });
        }

        Ok(Self::from_entries(entries))
    }

    /// Build from already-parsed entries, keeping file order.
    #[must_use]
    pub fn from_entries(entries: Vec<LexiconEntry>) -> Self {
        let mut by_lemma = HashMap::new();
        let mut by_inflection = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            by_lemma.entry(entry.lemma.to_lowercase()).or_insert(idx);
            for form in &entry.inflections {
                by_inflection.entry(form.to_lowercase()).or_insert(idx);
            }
        }
        Self {
            entries,
            by_lemma,
            by_inflection,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Find the entry for a raw cell value.
    ///
    /// Returns `None` for an unknown word or one that cleans to nothing.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<&LexiconEntry> {
        let cleaned = clean_word(word);
        if cleaned.is_empty() {
            return None;
        }
        let key = cleaned.to_lowercase();
        self.by_lemma
            .get(&key)
            .or_else(|| self.by_inflection.get(&key))
            .map(|&idx| &self.entries[idx])
    }

    /// Bracketed word-type annotation for a grid cell.
    ///
    /// `None` for an empty cell, `[unknown]` for a miss, else `[label]`.
    #[must_use]
    pub fn word_type(&self, word: &str) -> Option<String> {
        if clean_word(word).is_empty() {
            return None;
        }
        Some(match self.lookup(word) {
            Some(entry) => format!("[{}]", entry.pos.label()),
            None => UNKNOWN.to_string(),
        })
    }

    /// Detail view for a selected cell; `None` when the cell is empty.
    #[must_use]
    pub fn details(&self, word: &str) -> Option<WordDetails> {
        let cleaned = clean_word(word);
        if cleaned.is_empty() {
            return None;
        }
        Some(match self.lookup(cleaned) {
            Some(entry) => WordDetails::found(cleaned, entry),
            None => WordDetails::unknown(cleaned),
        })
    }

    /// Most frequent other lemmas sharing `pos`, highest frequency first.
    ///
    /// Ties keep file order.
    #[must_use]
    pub fn top_variants(&self, pos: &PartOfSpeech, exclude_lemma: &str, limit: usize) -> Vec<String> {
        let exclude = exclude_lemma.to_lowercase();
        let mut candidates: Vec<&LexiconEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.pos.same_code(pos) && entry.lemma.to_lowercase() != exclude)
            .collect();
        candidates.sort_by(|a, b| b.frequency.total_cmp(&a.frequency));
        candidates
            .into_iter()
            .take(limit)
            .map(|entry| entry.lemma.clone())
            .collect()
    }

    /// Variants for a raw word: same part of speech as its entry.
    ///
    /// Empty when the word is unknown.
    #[must_use]
    pub fn variants_for(&self, word: &str, limit: usize) -> Vec<String> {
        self.lookup(word)
            .map(|entry| self.top_variants(&entry.pos, &entry.lemma, limit))
            .unwrap_or_default()
    }
}

fn split_inflections(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|form| !form.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const TABLE: &str = "\
LEMMA,POS,FREQUENCY,INFLECTIONS
run,v,900,\"ran, running, runs\"
cat,n,700,cats
the,fw,99000,
quickly,r,300,
dog,n,800,dogs
Run,n,50,runs
left,j,120,
leave,v,400,\"left, leaving\"
";

    fn lexicon() -> Lexicon {
        Lexicon::from_reader(TABLE.as_bytes()).unwrap()
    }

    #[rstest]
    #[case("cat", "cat")]
    #[case("  (cat!) ", "cat")]
    #[case("...hello,", "hello")]
    #[case("don't.", "don't")]
    #[case("?!", "")]
    #[case("", "")]
    fn clean_word_strips_edge_runs(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(clean_word(raw), expected);
    }

    #[test]
    fn exact_lemma_match_is_case_insensitive() {
        let lex = lexicon();
        let entry = lex.lookup("CATS").unwrap();
        assert_eq!(entry.lemma, "cat");
        assert_eq!(lex.lookup("The,").unwrap().pos, PartOfSpeech::FunctionWord);
    }

    #[test]
    fn inflection_fallback_resolves_to_lemma() {
        let lex = lexicon();
        let entry = lex.lookup("ran").unwrap();
        assert_eq!(entry.lemma, "run");
        assert_eq!(entry.pos, PartOfSpeech::Verb);
    }

    #[test]
    fn lemma_phase_beats_inflection_phase() {
        // "left" is both a lemma (adjective) and an inflection of "leave".
        let lex = lexicon();
        assert_eq!(lex.lookup("left").unwrap().lemma, "left");
    }

    #[test]
    fn duplicate_lemmas_resolve_to_first_row() {
        let lex = lexicon();
        assert_eq!(lex.lookup("RUN").unwrap().pos, PartOfSpeech::Verb);
        // "runs" is listed under both; the earlier row wins.
        assert_eq!(lex.lookup("runs").unwrap().pos, PartOfSpeech::Verb);
    }

    #[test]
    fn word_type_annotations() {
        let lex = lexicon();
        assert_eq!(lex.word_type("running").as_deref(), Some("[verb]"));
        assert_eq!(lex.word_type("zebra").as_deref(), Some(UNKNOWN));
        assert_eq!(lex.word_type("   "), None);
        assert_eq!(lex.word_type("!!"), None);
    }

    #[test]
    fn details_for_known_and_unknown_words() {
        let lex = lexicon();
        let details = lex.details("Dogs.").unwrap();
        assert_eq!(details.word, "Dogs");
        assert_eq!(details.lemma.as_deref(), Some("dog"));
        assert_eq!(details.part_of_speech, "noun");
        assert_eq!(details.frequency, "800");
        assert_eq!(details.inflections, "dogs");

        let unknown = lex.details("zebra").unwrap();
        assert_eq!(unknown, WordDetails::unknown("zebra"));
        assert!(lex.details("").is_none());
    }

    #[test]
    fn variants_share_pos_and_sort_by_frequency() {
        let lex = lexicon();
        assert_eq!(lex.variants_for("cats", 10), vec!["dog", "Run"]);
        assert_eq!(lex.top_variants(&PartOfSpeech::Noun, "dog", 1), vec!["cat"]);
        assert!(lex.variants_for("zebra", 10).is_empty());
    }

    #[test]
    fn empty_lexicon_misses_everything() {
        let lex = Lexicon::empty();
        assert!(lex.is_empty());
        assert!(lex.lookup("cat").is_none());
        assert_eq!(lex.word_type("cat").as_deref(), Some(UNKNOWN));
    }

    #[test]
    fn from_path_reads_file_and_reports_missing_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordlist.csv");
        std::fs::write(&path, TABLE).unwrap();
        assert_eq!(Lexicon::from_path(&path).unwrap().len(), lexicon().len());

        let missing = dir.path().join("absent.csv");
        assert!(matches!(
            Lexicon::from_path(&missing),
            Err(LexiconError::Io { path, .. }) if path == missing
        ));
    }
}
