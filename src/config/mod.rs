//! Janitor configuration
//!
//! Values come from built-in defaults, an optional TOML file, environment
//! variables and command-line flags, in increasing order of precedence.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::cleanup::{CleanupConfig, DEFAULT_MAX_AGE};
use crate::error::{JanitorError, Result};

pub mod loader;

pub use loader::{ConfigLoader, ConfigOverrides};

pub const ENV_DOWNLOADS_PATH: &str = "ARCHIVE_JANITOR_DOWNLOADS_PATH";
pub const ENV_MAX_AGE: &str = "ARCHIVE_JANITOR_MAX_AGE";
pub const ENV_DRY_RUN: &str = "ARCHIVE_JANITOR_DRY_RUN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JanitorConfig {
    /// Directory holding the `*.git` archive directories
    #[serde(default = "default_downloads_path")]
    pub downloads_path: PathBuf,

    /// Archives modified longer ago than this are removed
    #[serde(with = "humantime_serde", default = "default_max_age")]
    pub max_age: Duration,

    #[serde(default)]
    pub dry_run: bool,
}

fn default_downloads_path() -> PathBuf {
    PathBuf::from("shared/cache/archive")
}

fn default_max_age() -> Duration {
    DEFAULT_MAX_AGE
}

impl Default for JanitorConfig {
    fn default() -> Self {
        Self {
            downloads_path: default_downloads_path(),
            max_age: default_max_age(),
            dry_run: false,
        }
    }
}

impl JanitorConfig {
    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Apply environment variable overrides using a custom lookup
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DOWNLOADS_PATH).filter(|p| !p.is_empty()) {
            self.downloads_path = PathBuf::from(path);
        }

        if let Some(max_age) = lookup(ENV_MAX_AGE) {
            self.max_age = parse_duration(&max_age).map_err(|e| env_error(ENV_MAX_AGE, e))?;
        }

        if let Some(dry_run) = lookup(ENV_DRY_RUN) {
            self.dry_run = parse_bool(&dry_run).map_err(|e| env_error(ENV_DRY_RUN, e))?;
        }

        Ok(())
    }

    /// Build the input of a single cleanup run
    pub fn cleanup_config(&self) -> CleanupConfig {
        CleanupConfig::new(&self.downloads_path)
            .with_max_age(self.max_age)
            .with_dry_run(self.dry_run)
    }
}

/// Parse a human-readable duration such as `2h`, `90m` or `3h 30m`
///
/// Uses the same syntax as `max_age` in the TOML file.
pub fn parse_duration(s: &str) -> Result<Duration> {
    humantime::parse_duration(s.trim())
        .map_err(|e| JanitorError::Config(format!("Invalid duration {:?}: {}", s, e)))
}

fn env_error(key: &str, err: JanitorError) -> JanitorError {
    let detail = match err {
        JanitorError::Config(message) => message,
        other => other.to_string(),
    };
    JanitorError::Config(format!("{}: {}", key, detail))
}

fn parse_bool(s: &str) -> Result<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(JanitorError::Config(format!(
            "Invalid boolean value: {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_duration("15m").unwrap(), Duration::from_secs(15 * 60));
        assert_eq!(parse_duration("2h").unwrap(), Duration::from_secs(2 * 3600));
        assert_eq!(parse_duration("7d").unwrap(), Duration::from_secs(7 * 86400));
        assert_eq!(
            parse_duration(" 3h 30m ").unwrap(),
            Duration::from_secs(3 * 3600 + 30 * 60)
        );

        assert!(parse_duration("invalid").is_err());
        assert!(parse_duration("7x").is_err());
        assert!(parse_duration("-2h").is_err());
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn test_defaults() {
        let config = JanitorConfig::default();
        assert_eq!(config.max_age, Duration::from_secs(2 * 3600));
        assert!(!config.dry_run);
        assert_eq!(config.downloads_path, PathBuf::from("shared/cache/archive"));
    }

    #[test]
    fn test_from_toml_with_humantime_max_age() {
        let config = JanitorConfig::from_toml(
            r#"
            downloads_path = "/var/opt/gitlab/cache/archive"
            max_age = "3h 30m"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.downloads_path,
            PathBuf::from("/var/opt/gitlab/cache/archive")
        );
        assert_eq!(config.max_age, Duration::from_secs(3 * 3600 + 30 * 60));
        assert!(!config.dry_run);
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        let err = JanitorConfig::from_toml("max_age = \"2h\"\nretention = 3").unwrap_err();
        assert!(matches!(err, JanitorError::Toml(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let rendered = JanitorConfig::default().to_toml().unwrap();
        assert!(rendered.contains("max_age = \"2h\""));
        assert_eq!(
            JanitorConfig::from_toml(&rendered).unwrap(),
            JanitorConfig::default()
        );
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[
            (ENV_DOWNLOADS_PATH, "/srv/downloads"),
            (ENV_MAX_AGE, "1h 30m"),
            (ENV_DRY_RUN, "true"),
        ]);
        let mut config = JanitorConfig::default();
        config.merge_env_with(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.downloads_path, PathBuf::from("/srv/downloads"));
        assert_eq!(config.max_age, Duration::from_secs(90 * 60));
        assert!(config.dry_run);
    }

    #[test]
    fn test_env_invalid_max_age_is_config_error() {
        let vars = env(&[(ENV_MAX_AGE, "soon")]);
        let mut config = JanitorConfig::default();
        let err = config.merge_env_with(|k| vars.get(k).cloned()).unwrap_err();

        assert!(matches!(err, JanitorError::Config(ref m) if m.contains(ENV_MAX_AGE)));
    }

    #[test]
    fn test_cleanup_config_carries_values() {
        let config = JanitorConfig {
            downloads_path: PathBuf::from("/tmp/archive"),
            max_age: Duration::from_secs(60),
            dry_run: true,
        };
        let cleanup = config.cleanup_config();

        assert_eq!(cleanup.root, PathBuf::from("/tmp/archive"));
        assert_eq!(cleanup.max_age, Duration::from_secs(60));
        assert!(cleanup.dry_run);
    }
}
