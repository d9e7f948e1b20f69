use wg_config::{ENV_PREFIX, WordGridConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &WordGridConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &WordGridConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let defaults = WordGridConfig::default();
    let mut warnings = Vec::new();

    if !config.completion.is_configured() && has_malformed_key(&env_keys, "COMPLETION") {
        warnings.push(
            "Completion config has no API key while WORDGRID_COMPLETION* env vars exist. Use double underscores (example: WORDGRID_COMPLETION__API_KEY)."
                .to_string(),
        );
    }

    if config.store.path == defaults.store.path && has_malformed_key(&env_keys, "STORE") {
        warnings.push(
            "Store config appears default while WORDGRID_STORE* env vars exist. Use double underscores (example: WORDGRID_STORE__PATH)."
                .to_string(),
        );
    }

    if config.lexicon.path == defaults.lexicon.path && has_malformed_key(&env_keys, "LEXICON") {
        warnings.push(
            "Lexicon config appears default while WORDGRID_LEXICON* env vars exist. Use double underscores (example: WORDGRID_LEXICON__PATH)."
                .to_string(),
        );
    }

    if config.server.port == defaults.server.port
        && config.server.host == defaults.server.host
        && has_malformed_key(&env_keys, "SERVER")
    {
        warnings.push(
            "Server config appears default while WORDGRID_SERVER* env vars exist. Use double underscores (example: WORDGRID_SERVER__PORT)."
                .to_string(),
        );
    }

    warnings
}

/// `WORDGRID_STORE__PATH` is well formed; `WORDGRID_STORE_PATH` is not.
fn has_malformed_key(keys: &[String], section: &str) -> bool {
    let prefix = format!("{ENV_PREFIX}{section}");
    let well_formed = format!("{prefix}__");
    keys.iter()
        .any(|key| key.starts_with(&prefix) && !key.starts_with(&well_formed))
}

#[cfg(test)]
mod tests {
    use wg_config::WordGridConfig;

    use super::collect_unconfigured_warnings;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = WordGridConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[
                ("WORDGRID_COMPLETION_API_KEY", "sk-test"),
                ("WORDGRID_STORE_PATH", "/tmp/p.json"),
                ("WORDGRID_LEXICON_PATH", "/tmp/w.csv"),
                ("WORDGRID_SERVER_PORT", "9000"),
            ]),
        );

        assert_eq!(warnings.len(), 4);
        assert!(warnings[0].contains("WORDGRID_COMPLETION__API_KEY"));
    }

    #[test]
    fn does_not_warn_for_well_formed_or_unrelated_keys() {
        let config = WordGridConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[
                ("WORDGRID_STORE__PATH", "public/word_puzzles.json"),
                ("WORDGRID_LOG", "debug"),
                ("PATH", "/usr/bin"),
            ]),
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn does_not_warn_when_completion_is_configured() {
        let mut config = WordGridConfig::default();
        config.completion.api_key = "sk-live".to_string();

        let warnings =
            collect_unconfigured_warnings(&config, env(&[("WORDGRID_COMPLETION_MODEL", "gpt-4o")]));

        assert!(warnings.is_empty());
    }
}
