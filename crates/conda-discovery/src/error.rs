//! Error types for conda-discovery

use std::path::PathBuf;

/// Result type alias for discovery operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised inside the discovery pipeline.
///
/// None of these reach callers of
/// [`CondaEnvService::get_interpreters`](crate::CondaEnvService::get_interpreters);
/// they exist so the failure can be logged before it collapses into an empty
/// result.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `conda info --json` produced output that is not the expected JSON shape
    #[error("Unexpected output from `conda info --json`: {0}")]
    InvalidInfo(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML or has the wrong shape
    #[error("Invalid config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_info_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(json_err);
        assert!(err.to_string().contains("conda info --json"));
    }

    #[test]
    fn test_config_parse_display() {
        let err = Error::ConfigParse {
            path: PathBuf::from("/etc/conda-envs/config.toml"),
            message: "expected a table".to_string(),
        };
        assert!(err.to_string().contains("config.toml"));
        assert!(err.to_string().contains("expected a table"));
    }
}
