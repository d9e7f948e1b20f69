//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use wg_config::WordGridConfig;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[store]
path = "data/puzzles.json"
lock_timeout_secs = 3
pretty = false

[lexicon]
path = "data/words.csv"

[server]
host = "0.0.0.0"
port = 8080
cors_origin = ""

[completion]
api_key = "sk-toml"
model = "gpt-4-1106-preview"
max_tokens = 120
temperature = 0.2

[grading]
concurrency = 4
"#,
        )?;

        let config: WordGridConfig = Figment::from(Serialized::defaults(WordGridConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.store.path, "data/puzzles.json");
        assert_eq!(config.store.lock_timeout_secs, 3);
        assert!(!config.store.pretty);
        assert_eq!(config.lexicon.path, "data/words.csv");
        assert_eq!(config.server.bind_addr(), "0.0.0.0:8080");
        assert!(!config.server.cors_enabled());
        assert!(config.completion.is_configured());
        assert_eq!(config.completion.model, "gpt-4-1106-preview");
        assert_eq!(config.completion.max_tokens, 120);
        assert_eq!(config.grading.concurrency, 4);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[completion]
model = "gpt-4o"
"#,
        )?;

        let config: WordGridConfig = Figment::from(Serialized::defaults(WordGridConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.completion.model, "gpt-4o");
        assert_eq!(config.completion.max_tokens, 300);
        assert_eq!(config.store.path, "public/word_puzzles.json");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "wordgrid.toml",
            r#"
[store]
path = "local.json"
"#,
        )?;

        let config = WordGridConfig::load(None).expect("config loads");
        assert_eq!(config.store.path, "local.json");
        Ok(())
    });
}

#[test]
fn explicit_file_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file("wordgrid.toml", "[store]\npath = \"local.json\"\n")?;
        jail.create_file("other.toml", "[store]\npath = \"explicit.json\"\n")?;

        let config = WordGridConfig::load(Some(std::path::Path::new("other.toml")))
            .expect("config loads");
        assert_eq!(config.store.path, "explicit.json");
        Ok(())
    });
}

#[test]
fn invalid_concurrency_in_file_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("wordgrid.toml", "[grading]\nconcurrency = 0\n")?;
        assert!(WordGridConfig::load(None).is_err());
        Ok(())
    });
}
