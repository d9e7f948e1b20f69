mod analyze;
mod lookup;
mod synonyms;
mod variants;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WordCommands;
use crate::context::AppContext;

/// Handle `wordgrid word`.
pub async fn handle(action: &WordCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        WordCommands::Lookup { word } => lookup::run(word, ctx, flags),
        WordCommands::Variants { word, limit } => variants::run(word, *limit, ctx, flags),
        WordCommands::Synonyms { word } => synonyms::run(word, ctx, flags).await,
        WordCommands::Analyze { title, row, col } => analyze::run(title, *row, *col, ctx, flags).await,
    }
}
