use serde::Serialize;
use wg_core::Puzzle;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CreateResponse {
    created: String,
    store: String,
}

pub async fn run(title: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.create(Puzzle::blank(title)).await?;
    output(
        &CreateResponse {
            created: title.to_string(),
            store: ctx.store.path().display().to_string(),
        },
        flags.format,
    )
}
