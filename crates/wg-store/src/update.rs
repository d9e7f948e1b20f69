//! Partial puzzle update used by `save`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use wg_core::Puzzle;

/// Fields to merge onto an existing puzzle. `None` fields are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PuzzleUpdate {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PuzzleUpdate {
    #[must_use]
    pub fn builder(title: impl Into<String>) -> PuzzleUpdateBuilder {
        PuzzleUpdateBuilder(Self {
            title: title.into(),
            ..Self::default()
        })
    }

    /// Shallow overwrite: every present field replaces the stored one.
    pub fn apply_to(self, puzzle: &mut Puzzle) {
        if let Some(words) = self.words {
            puzzle.words = words;
        }
        if let Some(quality) = self.quality {
            puzzle.quality = Some(quality);
        }
        puzzle.extra.extend(self.extra);
    }
}

/// A full snapshot is an update that touches every field it carries.
impl From<Puzzle> for PuzzleUpdate {
    fn from(puzzle: Puzzle) -> Self {
        Self {
            title: puzzle.title,
            words: Some(puzzle.words),
            quality: puzzle.quality,
            extra: puzzle.extra,
        }
    }
}

pub struct PuzzleUpdateBuilder(PuzzleUpdate);

impl PuzzleUpdateBuilder {
    #[must_use]
    pub fn words(mut self, words: Vec<String>) -> Self {
        self.0.words = Some(words);
        self
    }

    #[must_use]
    pub const fn quality(mut self, quality: f64) -> Self {
        self.0.quality = Some(quality);
        self
    }

    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.extra.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn build(self) -> PuzzleUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wg_core::CAPACITY;

    use super::*;

    #[test]
    fn absent_fields_are_preserved() {
        let mut puzzle = Puzzle::blank("Dawn");
        puzzle.quality = Some(66.0);
        puzzle.extra.insert("author".into(), json!("kim"));

        PuzzleUpdate::builder("Dawn")
            .field("theme", json!("light"))
            .build()
            .apply_to(&mut puzzle);

        assert_eq!(puzzle.quality, Some(66.0));
        assert_eq!(puzzle.words.len(), CAPACITY);
        assert_eq!(puzzle.extra["author"], json!("kim"));
        assert_eq!(puzzle.extra["theme"], json!("light"));
    }

    #[test]
    fn present_fields_overwrite() {
        let mut puzzle = Puzzle::blank("Dawn");
        puzzle.extra.insert("author".into(), json!("kim"));
        let mut words = vec![String::new(); CAPACITY];
        words[0] = "Birds".into();

        PuzzleUpdate::builder("Dawn")
            .words(words.clone())
            .quality(91.0)
            .field("author", json!("lee"))
            .build()
            .apply_to(&mut puzzle);

        assert_eq!(puzzle.words, words);
        assert_eq!(puzzle.quality, Some(91.0));
        assert_eq!(puzzle.extra["author"], json!("lee"));
    }

    #[test]
    fn deserializes_request_body_with_unknown_fields() {
        let update: PuzzleUpdate =
            serde_json::from_value(json!({ "title": "Dawn", "mood": "calm" })).unwrap();
        assert_eq!(update.words, None);
        assert_eq!(update.extra["mood"], json!("calm"));
    }
}
