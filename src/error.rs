use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JanitorError {
    /// The downloads root exists but could not be listed.
    #[error("Cannot read downloads directory {}: {source}", .path.display())]
    ReadRoot {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML output error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl JanitorError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Toml(_) => 2,
            Self::ReadRoot { .. } => 3,
            Self::Io(_) | Self::Serialization(_) | Self::TomlSer(_) => 1,
        }
    }

    /// Message suitable for showing to an operator
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadRoot { path, .. } => format!(
                "Downloads directory {} exists but is not readable",
                path.display()
            ),
            Self::Config(message) => format!("Configuration problem: {}", message),
            Self::Toml(e) => format!("Configuration file is not valid TOML: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, JanitorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_exit_with_argument_code() {
        let err = JanitorError::Config("bad max_age".to_string());
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.user_message(), "Configuration problem: bad max_age");
    }

    #[test]
    fn test_read_root_exit_code() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("missing");
        let source = walkdir::WalkDir::new(&path)
            .into_iter()
            .next()
            .unwrap()
            .unwrap_err();

        let err = JanitorError::ReadRoot {
            path: path.clone(),
            source,
        };
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_message().contains("not readable"));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: JanitorError = io.into();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("denied"));
    }
}
