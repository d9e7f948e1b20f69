use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct VariantsResponse {
    word: String,
    lemma: Option<String>,
    part_of_speech: Option<String>,
    variants: Vec<String>,
}

pub fn run(word: &str, limit: usize, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entry = ctx.lexicon.lookup(word);
    if entry.is_none() {
        tracing::warn!(word, "word not in lexicon; no variants");
    }
    let response = VariantsResponse {
        word: wg_lexicon::clean_word(word).to_string(),
        lemma: entry.map(|entry| entry.lemma.clone()),
        part_of_speech: entry.map(|entry| entry.pos.label().to_string()),
        variants: ctx.lexicon.variants_for(word, limit),
    };
    output(&response, flags.format)
}
