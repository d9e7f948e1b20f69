use std::path::Path;

use wg_completion::CompletionClient;
use wg_config::WordGridConfig;
use wg_lexicon::Lexicon;
use wg_store::PuzzleStore;

/// Shared state for every command: config, store handle, lexicon snapshot
/// and the completion client.
pub struct AppContext {
    pub config: WordGridConfig,
    pub store: PuzzleStore,
    pub lexicon: Lexicon,
    pub completion: CompletionClient,
}

impl AppContext {
    /// Build the context. A missing lexicon file is not fatal: lookups then
    /// report `[unknown]`.
    pub fn init(config: WordGridConfig) -> anyhow::Result<Self> {
        let store = PuzzleStore::from_config(&config.store);
        let lexicon = load_lexicon(Path::new(&config.lexicon.path))?;
        let completion = CompletionClient::new(&config.completion);

        tracing::debug!(
            store = %store.path().display(),
            lexicon_entries = lexicon.len(),
            completion = config.completion.is_configured(),
            "context ready"
        );

        Ok(Self {
            config,
            store,
            lexicon,
            completion,
        })
    }

    /// The completion client, or an error naming the missing setting.
    pub fn require_completion(&self) -> anyhow::Result<&CompletionClient> {
        self.config.require_completion()?;
        Ok(&self.completion)
    }
}

fn load_lexicon(path: &Path) -> anyhow::Result<Lexicon> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "lexicon file not found; word types will be [unknown]");
        return Ok(Lexicon::empty());
    }
    Lexicon::from_path(path).map_err(anyhow::Error::from)
}
