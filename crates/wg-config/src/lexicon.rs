//! Lexicon source configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "public/wordlist.csv".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LexiconConfig {
    /// CSV file with `LEMMA,POS,FREQUENCY,INFLECTIONS` columns.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
