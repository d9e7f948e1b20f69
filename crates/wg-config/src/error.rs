//! Errors raised while loading or checking the wordgrid configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer (defaults, `wordgrid.toml`, `WORDGRID_*`) failed to parse or
    /// extract into [`crate::WordGridConfig`].
    #[error("could not load wordgrid configuration: {0}")]
    Load(#[from] figment::Error),

    /// A feature was used whose settings are missing, e.g. grading without
    /// a completion API key.
    #[error("[{section}] is not set up; set {env_hint}, or add it to wordgrid.toml")]
    NotConfigured { section: String, env_hint: String },

    #[error("{field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn messages_point_at_the_setting_to_fix() {
        let missing = ConfigError::NotConfigured {
            section: "completion".into(),
            env_hint: "WORDGRID_COMPLETION__API_KEY".into(),
        };
        assert_eq!(
            missing.to_string(),
            "[completion] is not set up; set WORDGRID_COMPLETION__API_KEY, or add it to wordgrid.toml"
        );

        let invalid = ConfigError::InvalidValue {
            field: "grading.concurrency".into(),
            reason: "must be at least 1".into(),
        };
        assert_eq!(invalid.to_string(), "grading.concurrency: must be at least 1");
    }
}
