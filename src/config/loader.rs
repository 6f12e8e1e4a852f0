use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use super::JanitorConfig;
use crate::error::{JanitorError, Result};

/// Values supplied on the command line
///
/// `None` leaves the value from lower-precedence sources in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub downloads_path: Option<PathBuf>,
    pub max_age: Option<Duration>,
    pub dry_run: Option<bool>,
}

/// Assembles a [`JanitorConfig`] from file, environment and flags
pub struct ConfigLoader<F = fn(&str) -> Option<String>> {
    config_file: Option<PathBuf>,
    env_lookup: F,
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_file: None,
            env_lookup: process_env,
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> ConfigLoader<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Read settings from a TOML file; it must exist
    pub fn with_config_file(mut self, path: Option<PathBuf>) -> Self {
        self.config_file = path;
        self
    }

    /// Replace the environment used for overrides
    pub fn with_env<G>(self, env_lookup: G) -> ConfigLoader<G>
    where
        G: Fn(&str) -> Option<String>,
    {
        ConfigLoader {
            config_file: self.config_file,
            env_lookup,
        }
    }

    pub fn load(&self, overrides: &ConfigOverrides) -> Result<JanitorConfig> {
        let mut config = match &self.config_file {
            Some(path) => load_file(path)?,
            None => JanitorConfig::default(),
        };

        config.merge_env_with(&self.env_lookup)?;

        if let Some(path) = &overrides.downloads_path {
            config.downloads_path = path.clone();
        }
        if let Some(max_age) = overrides.max_age {
            config.max_age = max_age;
        }
        if let Some(dry_run) = overrides.dry_run {
            config.dry_run = dry_run;
        }

        debug!("Effective configuration: {:?}", config);
        Ok(config)
    }
}

fn load_file(path: &Path) -> Result<JanitorConfig> {
    debug!("Loading configuration from {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| {
        JanitorError::Config(format!("Cannot read config file {}: {}", path.display(), e))
    })?;
    JanitorConfig::from_toml(&content)
}
