//! [`CondaTree`] builder: a fake Conda installation on disk.

use std::fs;
use std::path::{Path, PathBuf};

use conda_discovery::Platform;
use tempfile::TempDir;

/// A temporary directory laid out like a Conda installation:
///
/// ```text
/// <root>/bin/python            (root environment)
/// <root>/envs/<name>/bin/python
/// ```
///
/// Interpreters are empty files; discovery only checks that they exist.
///
/// # Example
///
/// ```rust,no_run
/// use conda_test_utils::CondaTree;
///
/// let tree = CondaTree::new().with_env("py27").with_broken_env("half");
/// let json = tree.info_json();
/// ```
pub struct CondaTree {
    temp_dir: TempDir,
    platform: Platform,
    envs: Vec<PathBuf>,
}

impl Default for CondaTree {
    fn default() -> Self {
        Self::new()
    }
}

impl CondaTree {
    /// Create an installation whose root environment has an interpreter.
    pub fn new() -> Self {
        let tree = Self {
            temp_dir: TempDir::new().unwrap(),
            platform: Platform::current(),
            envs: Vec::new(),
        };
        tree.install_python(tree.root());
        tree
    }

    /// Root prefix of the installation.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add `envs/<name>` with an interpreter.
    pub fn with_env(mut self, name: &str) -> Self {
        let env = self.env_path(name);
        self.install_python(&env);
        self.envs.push(env);
        self
    }

    /// Add `envs/<name>` without an interpreter.
    pub fn with_broken_env(mut self, name: &str) -> Self {
        let env = self.env_path(name);
        fs::create_dir_all(&env).unwrap();
        self.envs.push(env);
        self
    }

    /// Place a conda launcher next to the root interpreter and return its path.
    pub fn install_launcher(&self) -> PathBuf {
        let python = self.python_path(self.root());
        let launcher = python.with_file_name(self.platform.conda_launcher_name());
        fs::write(&launcher, "").unwrap();
        launcher
    }

    /// Path of `envs/<name>`.
    pub fn env_path(&self, name: &str) -> PathBuf {
        self.root().join("envs").join(name)
    }

    /// Interpreter location inside the environment at `env`.
    pub fn python_path(&self, env: &Path) -> PathBuf {
        self.platform.python_path(env)
    }

    /// `conda info --json` output describing this installation.
    pub fn info_json(&self) -> String {
        let envs: Vec<String> = self
            .envs
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        serde_json::json!({
            "conda_version": "4.3.21",
            "default_prefix": self.root().display().to_string(),
            "envs": envs,
            "platform": "linux-64",
            "python_version": "3.6.1.final.0",
            "sys.version": "3.6.1 |Anaconda 4.4.0 (64-bit)| (default, May 11 2017, 13:09:58)",
        })
        .to_string()
    }

    fn install_python(&self, env: &Path) {
        let python = self.python_path(env);
        if let Some(parent) = python.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&python, "").unwrap();
    }
}
