use serde::Serialize;
use wg_grading::WordAssistant;

use crate::cli::GlobalFlags;
use crate::commands::parse_cell;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    title: String,
    cell: String,
    word: String,
    analysis: Option<String>,
}

pub async fn run(
    title: &str,
    row: usize,
    col: usize,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let cell = parse_cell(row, col)?;
    let completion = ctx.require_completion()?;
    let grid = ctx.store.get(title).await?.grid();

    let analysis = WordAssistant::new(completion).analyze(&grid, cell).await?;
    output(
        &AnalyzeResponse {
            title: title.to_string(),
            cell: cell.to_string(),
            word: grid.get(cell).to_string(),
            analysis,
        },
        flags.format,
    )
}
