use serde::Serialize;
use wg_grading::WordAssistant;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SynonymsResponse {
    word: String,
    synonyms: Vec<String>,
}

pub async fn run(word: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let completion = ctx.require_completion()?;
    let synonyms = WordAssistant::new(completion).synonyms(word).await?;
    output(
        &SynonymsResponse {
            word: word.trim().to_string(),
            synonyms,
        },
        flags.format,
    )
}
