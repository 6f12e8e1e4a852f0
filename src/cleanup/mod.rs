//! Repository archive cleanup
//!
//! Sweeps stale archive files out of the `*.git` directories directly under a
//! downloads root, then removes the archive directories left empty.
//!
//! - `policy` - Pure selection and age predicates
//! - `runner` - The two-phase sweep over the filesystem
//! - `stats` - Per-run counters and collected errors

pub mod policy;
pub mod runner;
pub mod stats;

pub use policy::{
    archive_extension, is_allowed_extension, is_archive_directory_name, is_older_than,
    ALLOWED_ARCHIVE_EXTENSIONS, ARCHIVE_DIRECTORY_PATTERN, DEFAULT_MAX_AGE,
};
pub use runner::{CleanupConfig, CleanupRunner};
pub use stats::CleanupStats;
