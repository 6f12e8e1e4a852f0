use serde::Serialize;

/// Statistics from a cleanup run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanupStats {
    /// Archive directories inspected
    pub directories_scanned: usize,
    /// Direct entries looked at inside archive directories
    pub entries_scanned: usize,
    /// Archive files removed (or that would be, in a dry run)
    pub files_removed: usize,
    /// Archive directories removed after the sweep
    pub directories_removed: usize,
    /// Bytes reclaimed from removed files
    pub bytes_reclaimed: u64,
    /// Errors encountered during cleanup
    pub errors: Vec<String>,
}

impl CleanupStats {
    /// Create a new empty stats struct
    pub fn new() -> Self {
        Self::default()
    }

    /// Add another stats instance to this one
    pub fn merge(&mut self, other: &CleanupStats) {
        self.directories_scanned += other.directories_scanned;
        self.entries_scanned += other.entries_scanned;
        self.files_removed += other.files_removed;
        self.directories_removed += other.directories_removed;
        self.bytes_reclaimed += other.bytes_reclaimed;
        self.errors.extend(other.errors.iter().cloned());
    }

    /// Whether the run removed nothing at all
    pub fn is_noop(&self) -> bool {
        self.files_removed == 0 && self.directories_removed == 0
    }

    /// Format bytes as human-readable string
    pub fn format_bytes(bytes: u64) -> String {
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.2} KB", bytes as f64 / 1024.0)
        } else if bytes < 1024 * 1024 * 1024 {
            format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
        } else {
            format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
        }
    }
}
