//! CLI argument structures
//!
//! This module defines the command-line interface of archive-janitor.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{parse_duration, ConfigLoader, ConfigOverrides};

/// Remove stale repository archives from a downloads cache
#[derive(Parser)]
#[command(name = "archive-janitor")]
#[command(about = "archive-janitor - Remove stale repository archives from a downloads cache", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Remove stale archives and empty archive directories (default command)
    Clean {
        #[command(flatten)]
        config: ConfigArgs,

        /// Preview what would be removed without making changes
        #[arg(long)]
        dry_run: bool,

        /// Print the cleanup statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Config {
        #[command(flatten)]
        config: ConfigArgs,

        /// Print the configuration as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
}

/// Options shared by every command that resolves configuration
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Downloads directory holding the *.git archive directories
    #[arg(short = 'p', long)]
    pub path: Option<PathBuf>,

    /// Only remove archives older than this (e.g. 30m, 2h, 1d)
    #[arg(long, value_name = "DURATION", value_parser = parse_max_age)]
    pub max_age: Option<Duration>,
}

impl ConfigArgs {
    pub fn loader(&self) -> ConfigLoader {
        ConfigLoader::new().with_config_file(self.config.clone())
    }

    pub fn overrides(&self, dry_run: Option<bool>) -> ConfigOverrides {
        ConfigOverrides {
            downloads_path: self.path.clone(),
            max_age: self.max_age,
            dry_run,
        }
    }
}

fn parse_max_age(s: &str) -> Result<Duration, String> {
    parse_duration(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_clean_flags() {
        let cli = Cli::try_parse_from([
            "archive-janitor",
            "-vv",
            "clean",
            "--path",
            "/srv/archive",
            "--max-age",
            "90m",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Clean {
                config,
                dry_run,
                json,
            }) => {
                assert_eq!(config.path, Some(PathBuf::from("/srv/archive")));
                assert_eq!(config.max_age, Some(Duration::from_secs(90 * 60)));
                assert!(dry_run);
                assert!(!json);
            }
            _ => panic!("expected clean command"),
        }
    }

    #[test]
    fn test_rejects_invalid_max_age() {
        let result = Cli::try_parse_from(["archive-janitor", "clean", "--max-age", "two hours"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["archive-janitor"]).unwrap();
        assert!(cli.command.is_none());
    }
}
