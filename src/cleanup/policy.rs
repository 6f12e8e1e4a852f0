//! Selection and age policy for archive cleanup
//!
//! Pure functions deciding which directories are scanned and which files are
//! eligible for removal. No I/O happens here.

use chrono::{DateTime, Utc};
use glob::{MatchOptions, Pattern};
use std::sync::OnceLock;
use std::time::Duration;

/// Extensions (text after the first dot) that mark a file as an archive
pub const ALLOWED_ARCHIVE_EXTENSIONS: [&str; 4] = ["tar", "tar.bz2", "tar.gz", "zip"];

/// Naming convention for repository archive directories
pub const ARCHIVE_DIRECTORY_PATTERN: &str = "*.git";

/// Archives younger than this are never touched
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(2 * 60 * 60);

fn archive_directory_pattern() -> &'static Pattern {
    static PATTERN: OnceLock<Pattern> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Pattern::new(ARCHIVE_DIRECTORY_PATTERN).expect("archive directory pattern is valid")
    })
}

/// Check whether a directory base name follows the `<name>.git` convention
///
/// The name needs a non-empty stem, so a bare `.git` directory (or any other
/// hidden name) is left alone.
pub fn is_archive_directory_name(name: &str) -> bool {
    if name.starts_with('.') {
        return false;
    }
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };
    archive_directory_pattern().matches_with(name, options)
}

/// Extract the compound extension of a file name
///
/// Everything after the first dot is the extension, so `sample.tar.gz`
/// yields `tar.gz` and `.cache.tar` yields `cache.tar`.
pub fn archive_extension(file_name: &str) -> Option<&str> {
    let dot = file_name.find('.')?;
    let extension = &file_name[dot + 1..];

    if extension.is_empty() {
        None
    } else {
        Some(extension)
    }
}

/// Case-sensitive membership test against [`ALLOWED_ARCHIVE_EXTENSIONS`]
pub fn is_allowed_extension(extension: &str) -> bool {
    ALLOWED_ARCHIVE_EXTENSIONS.contains(&extension)
}

/// Check whether a file name denotes an archive candidate
pub fn is_candidate_file_name(file_name: &str) -> bool {
    archive_extension(file_name).is_some_and(is_allowed_extension)
}

/// Check whether something modified at `modified` has outlived `max_age`
///
/// The comparison is strict: an item exactly `max_age` old is kept.
/// Timestamps in the future are never considered old.
pub fn is_older_than(modified: DateTime<Utc>, now: DateTime<Utc>, max_age: Duration) -> bool {
    let Ok(age) = now.signed_duration_since(modified).to_std() else {
        return false;
    };
    age > max_age
}
