//! Two-phase archive sweep
//!
//! Phase one walks every archive directory directly under the downloads root
//! and removes stale archive files. Phase two runs only once every directory
//! has been swept, and removes the archive directories left with no entries.

use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, trace, warn};
use walkdir::WalkDir;

use super::policy::{
    is_archive_directory_name, is_candidate_file_name, is_older_than, DEFAULT_MAX_AGE,
};
use super::stats::CleanupStats;
use crate::error::{JanitorError, Result};

/// Configuration for a single cleanup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupConfig {
    /// Downloads directory holding the `*.git` archive directories
    pub root: PathBuf,
    /// Only remove archives modified longer ago than this
    pub max_age: Duration,
    /// Report what would be removed without touching the filesystem
    pub dry_run: bool,
}

impl CleanupConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_age: DEFAULT_MAX_AGE,
            dry_run: false,
        }
    }

    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// An archive directory after its files were swept
#[derive(Debug)]
struct SweptDirectory {
    path: PathBuf,
    /// Files counted as removed but left on disk because of a dry run
    pending_removals: usize,
}

/// Removes stale repository archives from a downloads directory
pub struct CleanupRunner {
    config: CleanupConfig,
}

impl CleanupRunner {
    pub fn new(config: CleanupConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CleanupConfig {
        &self.config
    }

    /// Run one cleanup pass against the current time
    pub fn execute(&self) -> Result<CleanupStats> {
        self.execute_at(Utc::now())
    }

    /// Run one cleanup pass, judging file age relative to `now`
    ///
    /// A missing downloads directory is not an error. Failures on individual
    /// files or directories are collected in [`CleanupStats::errors`]; only a
    /// root that exists but cannot be listed is returned as an error.
    pub fn execute_at(&self, now: DateTime<Utc>) -> Result<CleanupStats> {
        let root = &self.config.root;
        let mut stats = CleanupStats::new();

        if !root.is_dir() {
            debug!(
                "Downloads directory {} does not exist, nothing to clean",
                root.display()
            );
            return Ok(stats);
        }

        let directories = discover_archive_directories(root, &mut stats)?;
        debug!(
            "Found {} archive directories under {}",
            directories.len(),
            root.display()
        );

        let mut swept = Vec::with_capacity(directories.len());
        for directory in directories {
            let (result, dir_stats) = self.sweep_directory(directory, now);
            stats.merge(&dir_stats);
            swept.push(result);
        }

        self.remove_empty_directories(&swept, &mut stats);

        info!(
            "Archive cleanup {}: {} files removed, {} directories removed, {} reclaimed, {} errors",
            if self.config.dry_run { "(dry run)" } else { "finished" },
            stats.files_removed,
            stats.directories_removed,
            CleanupStats::format_bytes(stats.bytes_reclaimed),
            stats.errors.len()
        );

        Ok(stats)
    }

    /// Remove stale archive files directly inside one archive directory
    fn sweep_directory(
        &self,
        directory: PathBuf,
        now: DateTime<Utc>,
    ) -> (SweptDirectory, CleanupStats) {
        let mut stats = CleanupStats::new();
        let mut pending_removals = 0;
        stats.directories_scanned += 1;

        for entry in WalkDir::new(&directory).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if is_not_found(&e) => continue,
                Err(e) => {
                    record_error(
                        &mut stats,
                        format!("Failed to read {}: {}", directory.display(), e),
                    );
                    continue;
                }
            };
            stats.entries_scanned += 1;
            let path = entry.path();

            if !entry.file_type().is_file() {
                debug!("Skipping non-file entry {}", path.display());
                continue;
            }

            let Some(file_name) = entry.file_name().to_str() else {
                debug!("Skipping non UTF-8 file name {}", path.display());
                continue;
            };
            if !is_candidate_file_name(file_name) {
                trace!("Skipping {}: not an archive", path.display());
                continue;
            }

            let metadata = match entry.metadata() {
                Ok(m) => m,
                Err(e) if is_not_found(&e) => continue,
                Err(e) => {
                    record_error(
                        &mut stats,
                        format!("Failed to stat {}: {}", path.display(), e),
                    );
                    continue;
                }
            };
            let modified: DateTime<Utc> = match metadata.modified() {
                Ok(time) => time.into(),
                Err(e) => {
                    record_error(
                        &mut stats,
                        format!("Failed to read mtime of {}: {}", path.display(), e),
                    );
                    continue;
                }
            };

            if !is_older_than(modified, now, self.config.max_age) {
                debug!("Keeping {}: modified {}", path.display(), modified);
                continue;
            }

            if self.config.dry_run {
                info!("DRY RUN: Would remove archive {}", path.display());
                pending_removals += 1;
            } else {
                match fs::remove_file(path) {
                    Ok(()) => info!("Removed archive {}", path.display()),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        debug!("Archive {} already removed", path.display());
                        continue;
                    }
                    Err(e) => {
                        record_error(
                            &mut stats,
                            format!("Failed to remove {}: {}", path.display(), e),
                        );
                        continue;
                    }
                }
            }

            stats.files_removed += 1;
            stats.bytes_reclaimed += metadata.len();
        }

        let swept = SweptDirectory {
            path: directory,
            pending_removals,
        };
        (swept, stats)
    }

    /// Remove archive directories that have no entries left
    fn remove_empty_directories(&self, swept: &[SweptDirectory], stats: &mut CleanupStats) {
        for directory in swept {
            let path = &directory.path;
            let entries = match count_entries(path) {
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => {
                    record_error(stats, format!("Failed to read {}: {}", path.display(), e));
                    continue;
                }
            };

            let remaining = if self.config.dry_run {
                entries.saturating_sub(directory.pending_removals)
            } else {
                entries
            };
            if remaining > 0 {
                debug!("Keeping {}: {} entries remain", path.display(), remaining);
                continue;
            }

            if self.config.dry_run {
                info!("DRY RUN: Would remove empty directory {}", path.display());
                stats.directories_removed += 1;
                continue;
            }

            match fs::remove_dir(path) {
                Ok(()) => {
                    info!("Removed empty directory {}", path.display());
                    stats.directories_removed += 1;
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                // Something was written into it after the emptiness check
                Err(e) if e.kind() == io::ErrorKind::DirectoryNotEmpty => {
                    debug!("Keeping {}: no longer empty", path.display());
                }
                Err(e) => record_error(
                    stats,
                    format!("Failed to remove {}: {}", path.display(), e),
                ),
            }
        }
    }
}

/// List the immediate children of `root` that are archive directories
///
/// Symlinks are not followed, so a link named like an archive directory is
/// skipped rather than swept.
fn discover_archive_directories(root: &Path, stats: &mut CleanupStats) -> Result<Vec<PathBuf>> {
    let mut directories = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(JanitorError::ReadRoot {
                    path: root.to_path_buf(),
                    source: e,
                })
            }
            Err(e) if is_not_found(&e) => continue,
            Err(e) => {
                record_error(
                    stats,
                    format!("Failed to read entry in {}: {}", root.display(), e),
                );
                continue;
            }
        };

        let matches_name = entry
            .file_name()
            .to_str()
            .is_some_and(is_archive_directory_name);
        if !matches_name {
            trace!("Ignoring {}", entry.path().display());
            continue;
        }
        if !entry.file_type().is_dir() {
            debug!(
                "Skipping {}: named like an archive directory but not a directory",
                entry.path().display()
            );
            continue;
        }

        directories.push(entry.into_path());
    }

    Ok(directories)
}

fn count_entries(path: &Path) -> io::Result<usize> {
    Ok(fs::read_dir(path)?.count())
}

fn is_not_found(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

fn record_error(stats: &mut CleanupStats, message: String) {
    warn!("{}", message);
    stats.errors.push(message);
}
