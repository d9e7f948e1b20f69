use super::PuzzleView;
use crate::cli::GlobalFlags;
use crate::context::{AppContext, GridSession};
use crate::output::output;

pub async fn run(title: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let puzzle = ctx.store.get(title).await?;
    let mut session = GridSession::open(&puzzle, &ctx.lexicon);
    session.clear();
    let saved = ctx.store.save(session.to_update()).await?;
    output(&PuzzleView::new(&session, &saved), flags.format)
}
