//! Error handling utilities

use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// - For `JanitorError`: shows the user message, plus the error chain in verbose mode
/// - For other errors: shows the error message and exits with 1
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    use crate::error::JanitorError;

    error!("Fatal error: {}", error);

    let exit_code = if let Some(janitor_err) = error.downcast_ref::<JanitorError>() {
        eprintln!("Error: {}", janitor_err.user_message());
        janitor_err.exit_code()
    } else {
        eprintln!("Error: {error}");
        1
    };

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code)
}
