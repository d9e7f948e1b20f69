use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(word: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(details) = ctx.lexicon.details(word) else {
        anyhow::bail!("'{word}' has no letters to look up");
    };
    output(&details, flags.format)
}
