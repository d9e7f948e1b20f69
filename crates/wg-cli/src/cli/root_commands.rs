use clap::{Args, Subcommand};

use crate::cli::subcommands::{PuzzleCommands, WordCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP surface.
    Serve(ServeArgs),
    /// Puzzle store and grid editing.
    Puzzle {
        #[command(subcommand)]
        action: PuzzleCommands,
    },
    /// Lexicon lookups and word suggestions.
    Word {
        #[command(subcommand)]
        action: WordCommands,
    },
    /// Ask the completion API a free-form question.
    Ask(AskArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Override `server.host`.
    #[arg(long)]
    pub host: Option<String>,
    /// Override `server.port`.
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// Question text; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}
