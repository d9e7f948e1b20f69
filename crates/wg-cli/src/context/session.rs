//! Editing session over one puzzle's grid.
//!
//! Every mutation runs in the same order: change the grid, recompute both
//! sentence sets, then refresh the per-cell word-type annotations. Readers
//! never see sentences or annotations from an older grid.

use serde::Serialize;
use wg_core::{CAPACITY, CellId, DerivedSentences, Grid, Puzzle, derive};
use wg_lexicon::{Lexicon, WordDetails};
use wg_store::PuzzleUpdate;

pub struct GridSession<'a> {
    title: String,
    grid: Grid,
    lexicon: &'a Lexicon,
    selected: Option<CellId>,
    sentences: DerivedSentences,
    word_types: Vec<Option<String>>,
}

/// Serializable view of a session.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub title: String,
    pub vertical: Vec<String>,
    pub horizontal: Vec<String>,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Serialize)]
pub struct CellView {
    pub row: usize,
    pub col: usize,
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_type: Option<String>,
}

impl<'a> GridSession<'a> {
    /// Start a session from a stored puzzle.
    #[must_use]
    pub fn open(puzzle: &Puzzle, lexicon: &'a Lexicon) -> Self {
        let mut session = Self {
            title: puzzle.title.clone(),
            grid: puzzle.grid(),
            lexicon,
            selected: None,
            sentences: DerivedSentences::default(),
            word_types: vec![None; CAPACITY],
        };
        session.refresh();
        session
    }

    #[must_use]
    pub const fn sentences(&self) -> &DerivedSentences {
        &self.sentences
    }

    #[must_use]
    pub fn word_type(&self, cell: CellId) -> Option<&str> {
        self.word_types[cell.index()].as_deref()
    }

    /// Write `word` into `cell` and select it. Returns the previous value.
    pub fn set_cell(&mut self, cell: CellId, word: &str) -> String {
        let previous = self.grid.set(cell, word);
        self.selected = Some(cell);
        self.refresh();
        tracing::debug!(title = %self.title, %cell, "cell updated");
        previous
    }

    /// Empty every cell and drop the selection.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.selected = None;
        self.refresh();
    }

    pub const fn select(&mut self, cell: CellId) {
        self.selected = Some(cell);
    }

    #[must_use]
    pub const fn selected(&self) -> Option<CellId> {
        self.selected
    }

    /// Lexicon details for the selected cell, if one is selected and non-empty.
    #[must_use]
    pub fn selected_details(&self) -> Option<WordDetails> {
        self.selected.and_then(|cell| self.lexicon.details(self.grid.get(cell)))
    }

    /// Save payload carrying the current words; other stored fields are kept.
    #[must_use]
    pub fn to_update(&self) -> PuzzleUpdate {
        PuzzleUpdate::builder(self.title.clone())
            .words(self.grid.words())
            .build()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let cells = CellId::all()
            .map(|cell| CellView {
                row: cell.row(),
                col: cell.col(),
                word: self.grid.get(cell).to_string(),
                word_type: self.word_type(cell).map(ToString::to_string),
            })
            .collect();
        SessionSnapshot {
            title: self.title.clone(),
            vertical: self.sentences.vertical.clone(),
            horizontal: self.sentences.horizontal.clone(),
            cells,
        }
    }

    fn refresh(&mut self) {
        self.sentences = derive(&self.grid);
        self.word_types = CellId::all()
            .map(|cell| self.lexicon.word_type(self.grid.get(cell)))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wg_core::{CellId, PLACEHOLDER, Puzzle};
    use wg_lexicon::Lexicon;

    use super::GridSession;

    fn lexicon() -> Lexicon {
        let csv = "LEMMA,POS,FREQUENCY,INFLECTIONS\ncat,n,50.0,cats\nsleep,v,80.0,\"sleeps,slept\"\n";
        Lexicon::from_reader(csv.as_bytes()).expect("lexicon should parse")
    }

    fn cell(row: usize, col: usize) -> CellId {
        CellId::new(row, col).expect("cell in range")
    }

    #[test]
    fn set_cell_recomputes_sentences_and_annotations() {
        let lexicon = lexicon();
        let mut session = GridSession::open(&Puzzle::blank("Nap"), &lexicon);
        assert_eq!(session.sentences().horizontal, vec![PLACEHOLDER]);

        session.set_cell(cell(0, 0), "The");
        session.set_cell(cell(0, 1), "cat");
        session.set_cell(cell(0, 2), "sleeps.");

        assert_eq!(session.sentences().horizontal, vec!["The cat sleeps."]);
        assert_eq!(session.sentences().vertical.len(), wg_core::COLS);
        assert!(session.sentences().vertical[0].starts_with("The"));
        assert!(session.sentences().vertical[0].contains(PLACEHOLDER));
        assert_eq!(session.word_type(cell(0, 1)), Some("[noun]"));
        assert_eq!(session.word_type(cell(0, 0)), Some("[unknown]"));
        assert_eq!(session.word_type(cell(1, 0)), None);
    }

    #[test]
    fn selected_details_follow_the_last_edit() {
        let lexicon = lexicon();
        let mut session = GridSession::open(&Puzzle::blank("Nap"), &lexicon);
        assert!(session.selected_details().is_none());

        session.set_cell(cell(2, 1), "slept");
        let details = session.selected_details().expect("details for a non-empty cell");
        assert_eq!(details.lemma.as_deref(), Some("sleep"));

        session.select(cell(4, 2));
        assert!(session.selected_details().is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let lexicon = lexicon();
        let mut session = GridSession::open(&Puzzle::blank("Nap"), &lexicon);
        session.set_cell(cell(1, 1), "cat");
        session.clear();

        assert!(session.to_update().words.expect("words").iter().all(String::is_empty));
        assert_eq!(session.sentences().horizontal, vec![PLACEHOLDER]);
        assert!(session.sentences().vertical.iter().all(|s| !s.contains("cat")));
        assert_eq!(session.selected(), None);
        assert_eq!(session.word_type(cell(1, 1)), None);
    }

    #[test]
    fn update_carries_title_and_words_only() {
        let lexicon = Lexicon::empty();
        let mut puzzle = Puzzle::blank("Nap");
        puzzle.quality = Some(72.0);
        let mut session = GridSession::open(&puzzle, &lexicon);
        session.set_cell(cell(0, 0), "Cats");

        let update = session.to_update();
        assert_eq!(update.title, "Nap");
        assert_eq!(update.quality, None);
        assert_eq!(update.words.expect("words present")[0], "Cats");
    }

    #[test]
    fn snapshot_is_row_major() {
        let lexicon = Lexicon::empty();
        let mut session = GridSession::open(&Puzzle::blank("Nap"), &lexicon);
        session.set_cell(cell(3, 2), "end");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.cells.len(), wg_core::CAPACITY);
        let end = &snapshot.cells[cell(3, 2).index()];
        assert_eq!((end.row, end.col, end.word.as_str()), (3, 2, "end"));
    }
}
