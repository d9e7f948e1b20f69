//! Puzzle store configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "public/word_puzzles.json".to_string()
}

/// Default wait for the collection write lock, in seconds.
const fn default_lock_timeout_secs() -> u64 {
    10
}

const fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path to the JSON puzzle collection.
    #[serde(default = "default_path")]
    pub path: String,

    /// How long a read-modify-write waits for another writer before failing.
    #[serde(default = "default_lock_timeout_secs")]
    pub lock_timeout_secs: u64,

    /// Pretty-print the collection on write (cosmetic only).
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            lock_timeout_secs: default_lock_timeout_secs(),
            pretty: default_pretty(),
        }
    }
}
