use clap::Subcommand;

/// Puzzle commands. Cell coordinates are zero-based.
#[derive(Clone, Debug, Subcommand)]
pub enum PuzzleCommands {
    /// List stored puzzles.
    List,
    /// Show a puzzle's grid, sentences and word types.
    Show { title: String },
    /// Create an empty puzzle.
    Create { title: String },
    /// Set one cell and save.
    Set {
        title: String,
        row: usize,
        col: usize,
        /// New cell value; pass "" to empty the cell.
        word: String,
    },
    /// Empty every cell and save.
    Clear { title: String },
    /// Grade every sentence and store the aggregate quality.
    Grade { title: String },
}
