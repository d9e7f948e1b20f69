//! Grid-to-sentence derivation.
//!
//! Two independent sentence sets are derived from one grid snapshot:
//!
//! - **Vertical**: one sentence per column, read top to bottom. Embedded
//!   `.,!?;:` characters are stripped from every word and empty cells are
//!   replaced by [`PLACEHOLDER`], so each sentence has one slot per row. A
//!   cell holding several words contributes all of them to its slot; only
//!   single-word cells give exactly `ROWS` tokens.
//! - **Horizontal**: all non-empty cells flattened row-major, joined with
//!   single spaces (punctuation kept), then re-split after `.`, `!` or `?`
//!   followed by whitespace. The count depends on punctuation, not on the grid.
//!
//! Both are pure functions of the snapshot.

use serde::{Deserialize, Serialize};

use crate::grid::{COLS, Grid, PLACEHOLDER};

/// Characters removed from words in vertical sentences.
const VERTICAL_STRIP: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Characters that end a horizontal sentence.
const SENTENCE_END: &[char] = &['.', '!', '?'];

/// Ephemeral sentence sets recomputed after every grid mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedSentences {
    pub vertical: Vec<String>,
    pub horizontal: Vec<String>,
}

impl DerivedSentences {
    /// Vertical sentences first, then horizontal, in array order.
    ///
    /// This is the order in which a grading pass scores them.
    pub fn iter_all(&self) -> impl Iterator<Item = &str> {
        self.vertical
            .iter()
            .chain(self.horizontal.iter())
            .map(String::as_str)
    }

    /// Total number of sentences across both sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertical.len() + self.horizontal.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Derive both sentence sets from a grid snapshot.
#[must_use]
pub fn derive(grid: &Grid) -> DerivedSentences {
    DerivedSentences {
        vertical: vertical_sentences(grid),
        horizontal: horizontal_sentences(grid),
    }
}

/// One sentence per column; always `COLS` sentences of `ROWS` cell slots.
/// Cell text is kept whole, so a multi-word cell adds more than one token.
#[must_use]
pub fn vertical_sentences(grid: &Grid) -> Vec<String> {
    (0..COLS)
        .map(|col| {
            grid.column(col)
                .map(vertical_token)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn vertical_token(word: &str) -> String {
    let stripped: String = word.chars().filter(|c| !VERTICAL_STRIP.contains(c)).collect();
    // A punctuation-only cell strips to nothing and counts as empty.
    if stripped.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        stripped
    }
}

/// Row-major flatten of non-empty cells, re-split on sentence punctuation.
///
/// A fully empty grid yields `[PLACEHOLDER]`.
#[must_use]
pub fn horizontal_sentences(grid: &Grid) -> Vec<String> {
    let text = grid
        .cells()
        .iter()
        .filter(|word| !word.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        return vec![PLACEHOLDER.to_string()];
    }
    split_sentences(&text)
}

/// Split text after any `.`, `!` or `?` that is followed by whitespace.
///
/// The text is trimmed first; empty input yields no sentences. The
/// whitespace run at each split point is consumed.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_whitespace() && prev.is_some_and(|p| SENTENCE_END.contains(&p)) {
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
            sentences.push(std::mem::take(&mut current));
            prev = Some(ch);
            continue;
        }
        current.push(ch);
        prev = Some(ch);
    }

    sentences.push(current);
    sentences
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::grid::{CAPACITY, ROWS};

    fn grid_of(words: &[&str]) -> Grid {
        Grid::from_words(words)
    }

    #[test]
    fn empty_grid_yields_placeholders_everywhere() {
        let derived = derive(&Grid::new());
        assert_eq!(derived.vertical, vec!["____ ____ ____ ____ ____"; COLS]);
        assert_eq!(derived.horizontal, vec!["____"]);
    }

    #[test]
    fn vertical_sentences_have_exactly_rows_tokens() {
        let grid = grid_of(&["The", "", "cats,", "cat", "sat!", "", "", "on", "mat."]);
        let vertical = vertical_sentences(&grid);
        assert_eq!(vertical.len(), COLS);
        for sentence in &vertical {
            assert_eq!(sentence.split(' ').count(), ROWS, "sentence: {sentence}");
        }
        assert_eq!(vertical[0], "The cat ____ ____ ____");
        assert_eq!(vertical[1], "____ sat on ____ ____");
        assert_eq!(vertical[2], "cats ____ mat ____ ____");
    }

    #[test]
    fn derivation_is_idempotent() {
        let grid = grid_of(&["Hello.", "big", "world!", "again"]);
        assert_eq!(derive(&grid), derive(&grid));
    }

    #[test]
    fn horizontal_resplit_is_content_driven() {
        let grid = grid_of(&["Hello.", "World", "Foo!", "Bar"]);
        assert_eq!(horizontal_sentences(&grid), vec!["Hello.", "World Foo!", "Bar"]);
    }

    #[test]
    fn punctuation_is_stripped_only_vertically() {
        let grid = grid_of(&["cat,", "sat"]);
        assert!(vertical_sentences(&grid)[0].starts_with("cat "));
        assert_eq!(horizontal_sentences(&grid), vec!["cat, sat"]);
    }

    #[test]
    fn embedded_punctuation_is_removed_not_just_trimmed() {
        let grid = grid_of(&["don;t"]);
        assert!(vertical_sentences(&grid)[0].starts_with("dont "));
    }

    #[test]
    fn multi_word_cell_keeps_its_words_in_one_slot() {
        let grid = grid_of(&["big dog", "", "", "ran."]);
        let vertical = vertical_sentences(&grid);
        assert_eq!(vertical[0], "big dog ran ____ ____ ____");
        assert_eq!(vertical[0].split(' ').count(), ROWS + 1);
        assert_eq!(vertical[1], "____ ____ ____ ____ ____");
        assert_eq!(horizontal_sentences(&grid), vec!["big dog ran."]);
    }

    #[test]
    fn punctuation_only_cell_becomes_placeholder_vertically() {
        let grid = grid_of(&["..."]);
        assert_eq!(vertical_sentences(&grid)[0], "____ ____ ____ ____ ____");
        assert_eq!(horizontal_sentences(&grid), vec!["..."]);
    }

    #[test]
    fn full_grid_flattens_row_major() {
        let words: Vec<String> = (0..CAPACITY).map(|i| format!("w{i}")).collect();
        let grid = Grid::from_words(&words);
        assert_eq!(horizontal_sentences(&grid), vec![words.join(" ")]);
    }

    #[test]
    fn iter_all_orders_vertical_before_horizontal() {
        let derived = DerivedSentences {
            vertical: vec!["v1".into(), "v2".into()],
            horizontal: vec!["h1".into()],
        };
        assert_eq!(derived.iter_all().collect::<Vec<_>>(), vec!["v1", "v2", "h1"]);
        assert_eq!(derived.len(), 3);
    }

    #[rstest]
    #[case("", vec![])]
    #[case("   ", vec![])]
    #[case("One.", vec!["One."])]
    #[case("One. Two? Three! Four", vec!["One.", "Two?", "Three!", "Four"])]
    #[case("Wait.  Double   space", vec!["Wait.", "Double   space"])]
    #[case("e.g. this", vec!["e.g.", "this"])]
    #[case("No split.here", vec!["No split.here"])]
    #[case("Ends with stop. ", vec!["Ends with stop."])]
    fn split_sentences_cases(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_sentences(input), expected);
    }
}
