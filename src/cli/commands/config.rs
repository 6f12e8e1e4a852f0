//! Config command implementation
//!
//! Prints the configuration a `clean` run would use after file, environment
//! and flag values are merged.

use anyhow::Result;

use crate::cli::args::ConfigArgs;

/// Execute the config command
pub fn run_config_command(args: &ConfigArgs, json: bool) -> Result<()> {
    let config = args.loader().load(&args.overrides(None))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", config.to_toml()?);
    }

    Ok(())
}
