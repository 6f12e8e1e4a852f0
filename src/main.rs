use archive_janitor::app::{handle_fatal_error, init_logging, AppConfig};
use archive_janitor::cli::{execute_command, Cli};
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let config = AppConfig::new(cli.verbose);
    init_logging(&config);

    if let Err(e) = execute_command(cli.command) {
        handle_fatal_error(e, config.verbose);
    }
}
