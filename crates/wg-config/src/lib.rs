//! # wg-config
//!
//! Layered configuration loading for wordgrid using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WORDGRID_*` prefix, `__` as separator)
//! 2. Conventional variables: `OPENAI_API_KEY` and `PORT`
//! 3. An explicit file passed by the caller (`--config`)
//! 4. Project-level `./wordgrid.toml`
//! 5. User-level `~/.config/wordgrid/config.toml`
//! 6. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WORDGRID_STORE__PATH` -> `store.path`,
//! `WORDGRID_COMPLETION__MODEL` -> `completion.model`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use wg_config::WordGridConfig;
//!
//! let config = WordGridConfig::load_with_dotenv(None).expect("config");
//! if config.completion.is_configured() {
//!     println!("grading with {}", config.completion.model);
//! }
//! ```

mod completion;
mod error;
mod grading;
mod lexicon;
mod server;
mod store;

pub use completion::CompletionConfig;
pub use error::ConfigError;
pub use grading::GradingConfig;
pub use lexicon::LexiconConfig;
pub use server::ServerConfig;
pub use store::StoreConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "wordgrid.toml";

/// Prefix for all wordgrid env vars.
pub const ENV_PREFIX: &str = "WORDGRID_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WordGridConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub completion: CompletionConfig,
    #[serde(default)]
    pub grading: GradingConfig,
}

impl WordGridConfig {
    /// Load configuration from all sources, plus an optional explicit file.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(extra).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory first, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load_with_dotenv(extra: Option<&Path>) -> Result<Self, ConfigError> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::load(extra)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers.
    #[must_use]
    pub fn figment(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(
                Env::raw()
                    .only(&["OPENAI_API_KEY"])
                    .map(|_| "completion.api_key".into()),
            )
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that extract fine but cannot work.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grading.concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "grading.concurrency".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.store.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if !(0.0..=2.0).contains(&self.completion.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "completion.temperature".into(),
                reason: format!("{} is outside 0.0..=2.0", self.completion.temperature),
            });
        }
        Ok(())
    }

    /// The completion section, or an error if no credential is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `completion.api_key` is empty.
    pub fn require_completion(&self) -> Result<&CompletionConfig, ConfigError> {
        if self.completion.is_configured() {
            Ok(&self.completion)
        } else {
            Err(ConfigError::NotConfigured {
                section: "completion".into(),
                env_hint: format!("OPENAI_API_KEY or {ENV_PREFIX}COMPLETION__API_KEY"),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("wordgrid").join("config.toml"))
    }
}
