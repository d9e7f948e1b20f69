mod clear;
mod create;
mod grade;
mod list;
mod set;
mod show;

use serde::Serialize;
use wg_core::{Puzzle, QualityBand};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PuzzleCommands;
use crate::context::AppContext;
use crate::context::session::{GridSession, SessionSnapshot};

/// Handle `wordgrid puzzle`.
pub async fn handle(action: &PuzzleCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        PuzzleCommands::List => list::run(ctx, flags).await,
        PuzzleCommands::Show { title } => show::run(title, ctx, flags).await,
        PuzzleCommands::Create { title } => create::run(title, ctx, flags).await,
        PuzzleCommands::Set { title, row, col, word } => set::run(title, *row, *col, word, ctx, flags).await,
        PuzzleCommands::Clear { title } => clear::run(title, ctx, flags).await,
        PuzzleCommands::Grade { title } => grade::run(title, ctx, flags).await,
    }
}

/// A session view plus the stored quality.
#[derive(Debug, Serialize)]
struct PuzzleView {
    #[serde(flatten)]
    session: SessionSnapshot,
    quality: Option<f64>,
    band: Option<QualityBand>,
}

impl PuzzleView {
    fn new(session: &GridSession<'_>, puzzle: &Puzzle) -> Self {
        Self {
            session: session.snapshot(),
            quality: puzzle.quality,
            band: puzzle.band(),
        }
    }
}
