//! # archive-janitor
//!
//! Sweeps stale repository archives out of a downloads cache.
//!
//! Every immediate `*.git` subdirectory of the downloads directory is
//! scanned; `tar`, `tar.bz2`, `tar.gz` and `zip` files in it that were last
//! modified longer ago than the retention threshold are removed, and archive
//! directories left empty afterwards are removed too.
//!
//! ## Usage
//!
//! ```bash
//! archive-janitor clean [--path DIR] [--max-age 2h] [--dry-run] [--json]
//! ```
//!
//! ## Modules
//!
//! - `app` - Logging setup and fatal error handling for the binary
//! - `cleanup` - Selection policy and the two-phase sweep
//! - `cli` - Command-line parsing and command implementations
//! - `config` - Configuration from TOML, environment variables and flags
//! - `error` - Error type shared across the crate
pub mod app;
pub mod cleanup;
pub mod cli;
pub mod config;
pub mod error;

pub use cleanup::{CleanupConfig, CleanupRunner, CleanupStats};
pub use error::{JanitorError, Result};
