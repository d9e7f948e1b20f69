use anyhow::Context;
use wg_config::WordGridConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered config plus any `--config` file.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<WordGridConfig> {
    if let Some(path) = &flags.config {
        anyhow::ensure!(path.is_file(), "config file '{}' does not exist", path.display());
    }

    WordGridConfig::load_with_dotenv(flags.config.as_deref()).context("failed to load wordgrid configuration")
}
