//! Platform-specific layout of a Conda installation

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Operating-system family that decides where Conda puts its executables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Linux, macOS and other Unix-likes: `<env>/bin/python`, `conda`
    Unix,
    /// Windows: `<env>\python.exe`, `conda.exe`
    Windows,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Path segments from an environment root to its Python executable.
    pub fn python_relative_path(&self) -> &'static [&'static str] {
        match self {
            Platform::Unix => &["bin", "python"],
            Platform::Windows => &["python.exe"],
        }
    }

    /// File name of the Conda launcher.
    pub fn conda_launcher_name(&self) -> &'static str {
        match self {
            Platform::Unix => "conda",
            Platform::Windows => "conda.exe",
        }
    }

    /// Location of the Python executable inside the environment at `root`.
    pub fn python_path(&self, root: &Path) -> PathBuf {
        self.python_relative_path()
            .iter()
            .fold(root.to_path_buf(), |path, segment| path.join(segment))
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
