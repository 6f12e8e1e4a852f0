//! Common test utilities and helpers

#![allow(dead_code)]

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

pub const HOUR: Duration = Duration::from_secs(60 * 60);

/// A downloads directory inside a temporary directory
pub struct DownloadsFixture {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl DownloadsFixture {
    /// Create the fixture with the downloads directory present
    pub fn new() -> Self {
        let fixture = Self::without_root();
        fs::create_dir_all(&fixture.path).unwrap();
        fixture
    }

    /// Create the fixture without creating the downloads directory
    pub fn without_root() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shared/cache/archive");
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create `sample.<ext>` for each extension under `dirname`, last modified `age` ago
    pub fn create_temporary_files(
        &self,
        dirname: &str,
        extensions: &[&str],
        age: Duration,
    ) -> Vec<PathBuf> {
        let dir = self.path.join(dirname);
        fs::create_dir_all(&dir).unwrap();

        extensions
            .iter()
            .map(|ext| {
                let file_path = dir.join(format!("sample.{ext}"));
                touch(&file_path, age);
                file_path
            })
            .collect()
    }
}

/// Create or truncate a file and backdate its modification time
pub fn touch(path: &Path, age: Duration) {
    let file = File::create(path).unwrap();
    file.set_modified(SystemTime::now() - age).unwrap();
}
