//! Presentation bands for 0-100 quality scores.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Colour band for a per-sentence grade or an aggregate puzzle quality.
///
/// ```text
/// [0, 60)   low   red
/// [60, 80)  fair  orange
/// [80, 100] good  green
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityBand {
    Low,
    Fair,
    Good,
}

impl QualityBand {
    #[must_use]
    pub fn of(score: f64) -> Self {
        if score < 60.0 {
            Self::Low
        } else if score < 80.0 {
            Self::Fair
        } else {
            Self::Good
        }
    }

    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "red",
            Self::Fair => "orange",
            Self::Good => "green",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Fair => "fair",
            Self::Good => "good",
        }
    }
}

impl fmt::Display for QualityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
