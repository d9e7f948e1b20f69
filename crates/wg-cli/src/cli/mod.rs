use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `wordgrid` binary.
#[derive(Debug, Parser)]
#[command(name = "wordgrid", version, about = "Build, grade and serve word-grid puzzles")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra TOML config file, layered over ./wordgrid.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{PuzzleCommands, WordCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["wordgrid", "--format", "table", "--verbose", "puzzle", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Puzzle {
                action: PuzzleCommands::List
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["wordgrid", "word", "lookup", "ran", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Word {
                action: WordCommands::Lookup { ref word }
            } if word == "ran"
        ));
    }

    #[test]
    fn set_takes_cell_coordinates() {
        let cli = Cli::try_parse_from(["wordgrid", "puzzle", "set", "Dawn", "4", "2", "sleeps."])
            .expect("cli should parse");
        let Commands::Puzzle {
            action: PuzzleCommands::Set { title, row, col, word },
        } = cli.command
        else {
            panic!("expected puzzle set");
        };
        assert_eq!((title.as_str(), row, col, word.as_str()), ("Dawn", 4, 2, "sleeps."));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["wordgrid", "--format", "xml", "puzzle", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["wordgrid", "serve", "--config", "/tmp/wg.toml"])
            .expect("cli should parse");
        assert_eq!(
            cli.global_flags().config.as_deref(),
            Some(std::path::Path::new("/tmp/wg.toml"))
        );
    }
}
