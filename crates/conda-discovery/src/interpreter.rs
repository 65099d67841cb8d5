//! Interpreter records produced and consumed by discovery

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A validated Conda interpreter.
///
/// Built fresh on every discovery call. `path` existed on disk when the
/// record was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterRecord {
    /// Absolute path to the Python executable
    pub path: PathBuf,
    /// Human-readable label, e.g. `Anaconda 4.4.0 (64 bit, 3.6.1) (myenv)`
    pub display_name: String,
    /// Vendor tag; always [`CONDA_COMPANY_NAME`](crate::display::CONDA_COMPANY_NAME)
    pub company_display_name: String,
}

/// An interpreter as reported by a secondary lookup provider.
///
/// Only `path` is guaranteed; the rest is whatever the provider knows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterInfo {
    pub path: PathBuf,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub company_display_name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl InterpreterInfo {
    /// Create an entry with only a path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company_display_name = Some(company.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}
