use serde::Serialize;
use wg_lexicon::WordDetails;

use super::PuzzleView;
use crate::cli::GlobalFlags;
use crate::commands::parse_cell;
use crate::context::{AppContext, GridSession};
use crate::output::output;

#[derive(Debug, Serialize)]
struct SetResponse {
    cell: String,
    previous: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<WordDetails>,
    puzzle: PuzzleView,
}

pub async fn run(
    title: &str,
    row: usize,
    col: usize,
    word: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let cell = parse_cell(row, col)?;
    let puzzle = ctx.store.get(title).await?;
    let mut session = GridSession::open(&puzzle, &ctx.lexicon);

    let previous = session.set_cell(cell, word);
    let saved = ctx.store.save(session.to_update()).await?;

    output(
        &SetResponse {
            cell: cell.to_string(),
            previous,
            details: session.selected_details(),
            puzzle: PuzzleView::new(&session, &saved),
        },
        flags.format,
    )
}
