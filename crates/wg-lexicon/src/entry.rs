//! Lexicon entry, part-of-speech codes, and the detail view.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel shown for every field of a word the lexicon does not know.
pub const UNKNOWN: &str = "[unknown]";

// ---------------------------------------------------------------------------
// PartOfSpeech
// ---------------------------------------------------------------------------

/// Part-of-speech code from the lexicon's `POS` column.
///
/// Unrecognized codes are kept verbatim in [`PartOfSpeech::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Verb,
    FunctionWord,
    Noun,
    Adverb,
    Adjective,
    Interjection,
    Numeral,
    ProperNoun,
    Abbreviation,
    Other(String),
}

impl PartOfSpeech {
    /// Decode a code case-insensitively.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "v" => Self::Verb,
            "fw" => Self::FunctionWord,
            "n" => Self::Noun,
            "r" => Self::Adverb,
            "j" => Self::Adjective,
            "u" => Self::Interjection,
            "m" => Self::Numeral,
            "k" => Self::ProperNoun,
            "abbr" => Self::Abbreviation,
            _ => Self::Other(code.trim().to_string()),
        }
    }

    /// The lexicon code this value was decoded from.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Verb => "v",
            Self::FunctionWord => "fw",
            Self::Noun => "n",
            Self::Adverb => "r",
            Self::Adjective => "j",
            Self::Interjection => "u",
            Self::Numeral => "m",
            Self::ProperNoun => "k",
            Self::Abbreviation => "abbr",
            Self::Other(code) => code,
        }
    }

    /// Human-readable label; unknown codes pass through.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Verb => "verb",
            Self::FunctionWord => "function word",
            Self::Noun => "noun",
            Self::Adverb => "adverb",
            Self::Adjective => "adjective",
            Self::Interjection => "interjection",
            Self::Numeral => "numeral",
            Self::ProperNoun => "proper noun",
            Self::Abbreviation => "abbreviation",
            Self::Other(code) => code,
        }
    }

    /// Compare by code, ignoring case (`Other("X")` matches `Other("x")`).
    #[must_use]
    pub fn same_code(&self, other: &Self) -> bool {
        self.code().eq_ignore_ascii_case(other.code())
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LexiconEntry
// ---------------------------------------------------------------------------

/// One row of the lexicon table. Read-only after load.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconEntry {
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub frequency: f64,
    pub inflections: Vec<String>,
}

impl LexiconEntry {
    /// Inflections as they appear in the source cell.
    #[must_use]
    pub fn inflections_text(&self) -> String {
        self.inflections.join(", ")
    }
}

// ---------------------------------------------------------------------------
// WordDetails
// ---------------------------------------------------------------------------

/// Detail view for a selected cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDetails {
    /// The cleaned word that was looked up.
    pub word: String,
    /// Matched lemma, absent when the word is unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
    pub part_of_speech: String,
    pub frequency: String,
    pub inflections: String,
}

impl WordDetails {
    #[must_use]
    pub fn found(word: &str, entry: &LexiconEntry) -> Self {
        Self {
            word: word.to_string(),
            lemma: Some(entry.lemma.clone()),
            part_of_speech: entry.pos.label().to_string(),
            frequency: entry.frequency.to_string(),
            inflections: entry.inflections_text(),
        }
    }

    #[must_use]
    pub fn unknown(word: &str) -> Self {
        Self {
            word: word.to_string(),
            lemma: None,
            part_of_speech: UNKNOWN.to_string(),
            frequency: UNKNOWN.to_string(),
            inflections: UNKNOWN.to_string(),
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        self.lemma.is_some()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("v", "verb")]
    #[case("FW", "function word")]
    #[case("n", "noun")]
    #[case("r", "adverb")]
    #[case("j", "adjective")]
    #[case("u", "interjection")]
    #[case("m", "numeral")]
    #[case("k", "proper noun")]
    #[case("abbr", "abbreviation")]
    #[case("xq", "xq")]
    fn codes_map_to_labels(#[case] code: &str, #[case] label: &str) {
        assert_eq!(PartOfSpeech::from_code(code).label(), label);
    }

    #[test]
    fn unknown_details_use_sentinel_everywhere() {
        let details = WordDetails::unknown("zzz");
        assert!(!details.is_known());
        assert_eq!(details.part_of_speech, UNKNOWN);
        assert_eq!(details.frequency, UNKNOWN);
        assert_eq!(details.inflections, UNKNOWN);
    }

    #[test]
    fn whole_frequencies_render_without_fraction() {
        let entry = LexiconEntry {
            lemma: "run".into(),
            pos: PartOfSpeech::Verb,
            frequency: 1520.0,
            inflections: vec!["ran".into(), "running".into()],
        };
        let details = WordDetails::found("ran", &entry);
        assert_eq!(details.frequency, "1520");
        assert_eq!(details.inflections, "ran, running");
    }
}
