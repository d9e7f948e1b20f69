//! Grading pipeline configuration.

use serde::{Deserialize, Serialize};

/// One sentence in flight at a time.
const fn default_concurrency() -> usize {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GradingConfig {
    /// Maximum scoring requests in flight during one pass. `1` keeps the
    /// pass strictly sequential; values above `1` fan out while keeping
    /// result order.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}
