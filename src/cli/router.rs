//! Command routing and execution

use anyhow::Result;

use crate::cli::args::{Commands, ConfigArgs};
use crate::cli::commands::{run_clean_command, run_config_command};

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Clean {
            config,
            dry_run,
            json,
        }) => run_clean_command(&config, dry_run, json),
        Some(Commands::Config { config, json }) => run_config_command(&config, json),
        // Default to a clean run
        None => run_clean_command(&ConfigArgs::default(), false, false),
    }
}
