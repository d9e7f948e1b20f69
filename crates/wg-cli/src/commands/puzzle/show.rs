use super::PuzzleView;
use crate::cli::GlobalFlags;
use crate::context::{AppContext, GridSession};
use crate::output::output;

pub async fn run(title: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let puzzle = ctx.store.get(title).await?;
    let session = GridSession::open(&puzzle, &ctx.lexicon);
    output(&PuzzleView::new(&session, &puzzle), flags.format)
}
