use serde::Serialize;
use wg_core::QualityBand;
use wg_grading::{Grader, SentenceGrade};

use crate::cli::GlobalFlags;
use crate::context::{AppContext, GridSession};
use crate::output::output;

#[derive(Debug, Serialize)]
struct GradeResponse {
    title: String,
    quality: f64,
    band: QualityBand,
    grades: Vec<GradeRow>,
}

#[derive(Debug, Serialize)]
struct GradeRow {
    direction: &'static str,
    text: String,
    score: f64,
    band: QualityBand,
}

impl GradeRow {
    fn new(direction: &'static str, grade: SentenceGrade) -> Self {
        Self {
            direction,
            text: grade.text,
            score: grade.score,
            band: grade.band,
        }
    }
}

pub async fn run(title: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let completion = ctx.require_completion()?;
    let puzzle = ctx.store.get(title).await?;
    let session = GridSession::open(&puzzle, &ctx.lexicon);

    let report = Grader::new(completion)
        .with_concurrency(ctx.config.grading.concurrency)
        .grade_puzzle(&ctx.store, title, session.sentences())
        .await?;

    let band = report.band();
    let quality = report.quality;
    let grades = report
        .vertical
        .into_iter()
        .map(|grade| GradeRow::new("vertical", grade))
        .chain(report.horizontal.into_iter().map(|grade| GradeRow::new("horizontal", grade)))
        .collect();

    output(
        &GradeResponse {
            title: title.to_string(),
            quality,
            band,
            grades,
        },
        flags.format,
    )
}
