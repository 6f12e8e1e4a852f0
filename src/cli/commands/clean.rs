//! Clean command implementation

use anyhow::Result;

use crate::cleanup::{CleanupRunner, CleanupStats};
use crate::cli::args::ConfigArgs;
use crate::config::JanitorConfig;

/// Execute the clean command
pub fn run_clean_command(args: &ConfigArgs, dry_run: bool, json: bool) -> Result<()> {
    let config = args.loader().load(&args.overrides(dry_run.then_some(true)))?;
    let runner = CleanupRunner::new(config.cleanup_config());

    let stats = runner.execute()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_summary(&config, &stats);
    }

    Ok(())
}

fn print_summary(config: &JanitorConfig, stats: &CleanupStats) {
    println!(
        "Archives older than {} in {}",
        humantime::format_duration(config.max_age),
        config.downloads_path.display()
    );
    println!();

    if config.dry_run {
        println!("=== Dry Run Results ===");
    } else {
        println!("=== Cleanup Results ===");
    }

    println!(
        "{} archive directories scanned, {} entries inspected",
        stats.directories_scanned, stats.entries_scanned
    );
    println!(
        "{} files removed, {} directories removed, {} reclaimed",
        stats.files_removed,
        stats.directories_removed,
        CleanupStats::format_bytes(stats.bytes_reclaimed)
    );

    if !stats.errors.is_empty() {
        println!();
        println!("Errors encountered:");
        for error in &stats.errors {
            println!("  - {}", error);
        }
    }
}
