use clap::Subcommand;

/// Word commands.
#[derive(Clone, Debug, Subcommand)]
pub enum WordCommands {
    /// Part of speech, frequency and inflections.
    Lookup { word: String },
    /// Most frequent lemmas with the same part of speech.
    Variants {
        word: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Synonyms from the completion API.
    Synonyms { word: String },
    /// Analyze a puzzle cell in its row and column context.
    Analyze { title: String, row: usize, col: usize },
}
