//! Discovery configuration.
//!
//! Loaded from a TOML file such as:
//!
//! ```toml
//! fallback_command = "conda"
//! conda_path = "/opt/conda/bin/conda"
//! platform = "unix"
//!
//! [[interpreters]]
//! path = "/opt/conda/bin/python"
//! display_name = "Anaconda 4.4.0 (64-bit)"
//! version = "3.6.1"
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::interpreter::InterpreterInfo;
use crate::platform::Platform;

/// Command invoked when no better conda binary is known
pub const DEFAULT_CONDA_COMMAND: &str = "conda";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Bare command name (or path) used when the locator finds nothing
    #[serde(default = "default_fallback_command")]
    pub fallback_command: String,
    /// Explicit conda binary; bypasses the lookup entirely
    #[serde(default)]
    pub conda_path: Option<PathBuf>,
    /// Layout override; defaults to the host platform
    #[serde(default)]
    pub platform: Option<Platform>,
    /// Known interpreters served to the locator as a secondary lookup
    #[serde(default)]
    pub interpreters: Vec<InterpreterInfo>,
}

fn default_fallback_command() -> String {
    DEFAULT_CONDA_COMMAND.to_string()
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            fallback_command: default_fallback_command(),
            conda_path: None,
            platform: None,
            interpreters: Vec::new(),
        }
    }
}

impl DiscoveryConfig {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<string>"))
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Effective platform layout.
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_default()
    }

    /// Set an explicit conda binary.
    pub fn with_conda_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.conda_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DiscoveryConfig::from_toml_str("").unwrap();
        assert_eq!(config, DiscoveryConfig::default());
        assert_eq!(config.fallback_command, "conda");
        assert_eq!(config.platform(), Platform::current());
    }

    #[test]
    fn test_full_config() {
        let toml_str = r#"
fallback_command = "mamba"
conda_path = "/opt/conda/bin/conda"
platform = "windows"

[[interpreters]]
path = "C:/Anaconda3/python.exe"
display_name = "Anaconda 4.4.0 (64-bit)"
company_display_name = "Continuum Analytics, Inc."
version = "3.6.1"

[[interpreters]]
path = "/usr/bin/python3"
"#;
        let config = DiscoveryConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.fallback_command, "mamba");
        assert_eq!(
            config.conda_path.as_deref(),
            Some(Path::new("/opt/conda/bin/conda"))
        );
        assert_eq!(config.platform(), Platform::Windows);
        assert_eq!(config.interpreters.len(), 2);
        assert_eq!(config.interpreters[0].version.as_deref(), Some("3.6.1"));
        assert!(config.interpreters[1].display_name.is_none());
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "platform = \"beos\"").unwrap();

        let err = DiscoveryConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_missing_config_file() {
        let temp = TempDir::new().unwrap();
        let err = DiscoveryConfig::load(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }

    #[test]
    fn test_with_conda_path() {
        let config = DiscoveryConfig::default().with_conda_path("/usr/local/bin/conda");
        assert_eq!(
            config.conda_path,
            Some(PathBuf::from("/usr/local/bin/conda"))
        );
    }
}
