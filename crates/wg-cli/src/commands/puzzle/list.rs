use serde::Serialize;
use wg_core::QualityBand;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PuzzleListResponse {
    puzzles: Vec<PuzzleSummary>,
}

#[derive(Debug, Serialize)]
struct PuzzleSummary {
    title: String,
    filled: usize,
    quality: Option<f64>,
    band: Option<QualityBand>,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let puzzles = ctx
        .store
        .list()
        .await?
        .into_iter()
        .map(|puzzle| PuzzleSummary {
            filled: puzzle.words.iter().filter(|word| !word.trim().is_empty()).count(),
            band: puzzle.band(),
            quality: puzzle.quality,
            title: puzzle.title,
        })
        .collect();
    output(&PuzzleListResponse { puzzles }, flags.format)
}
