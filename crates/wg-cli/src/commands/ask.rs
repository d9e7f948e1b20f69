use serde::Serialize;
use wg_grading::WordAssistant;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AskArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AskResponse {
    question: String,
    answer: Option<String>,
}

/// Handle `wordgrid ask`.
pub async fn handle(args: &AskArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let completion = ctx.require_completion()?;
    let question = args.question.join(" ");
    let answer = WordAssistant::new(completion).ask(&question).await?;
    output(&AskResponse { question, answer }, flags.format)
}
