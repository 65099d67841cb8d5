//! Locating the conda binary.
//!
//! Resolution order:
//!
//! 1. an explicitly configured `conda_path`,
//! 2. the launcher next to the newest Conda interpreter known to the
//!    secondary lookup, if that file exists,
//! 3. the fallback command (`conda` by default), left to `PATH` search.
//!
//! None of these steps can fail; uncertainty always lands on step 3.

use std::cmp::Ordering;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::config::DiscoveryConfig;
use crate::display::is_conda_environment;
use crate::interpreter::InterpreterInfo;
use crate::lookup::InterpreterLookup;
use crate::platform::Platform;
use crate::system::FileSystem;
use crate::version::compare_versions;

/// Decides which conda executable discovery should invoke
pub struct CondaLocator {
    fs: Arc<dyn FileSystem>,
    lookup: Option<Arc<dyn InterpreterLookup>>,
    platform: Platform,
    conda_path: Option<PathBuf>,
    fallback: PathBuf,
}

impl CondaLocator {
    pub fn new(config: &DiscoveryConfig, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            lookup: None,
            platform: config.platform(),
            conda_path: config.conda_path.clone(),
            fallback: PathBuf::from(&config.fallback_command),
        }
    }

    /// Attach a secondary interpreter lookup.
    pub fn with_lookup(mut self, lookup: Arc<dyn InterpreterLookup>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Resolve the conda executable to invoke.
    pub async fn conda_file(&self) -> PathBuf {
        if let Some(path) = &self.conda_path {
            debug!(path = %path.display(), "Using configured conda path");
            return path.clone();
        }

        match self.conda_file_from_lookup().await {
            Some(path) => path,
            None => {
                debug!(command = %self.fallback.display(), "Falling back to conda on PATH");
                self.fallback.clone()
            }
        }
    }

    async fn conda_file_from_lookup(&self) -> Option<PathBuf> {
        let lookup = self.lookup.as_ref()?;
        let interpreters = lookup.list_interpreters().await;
        let newest = latest_conda_interpreter(&interpreters)?;

        let candidate = newest
            .path
            .with_file_name(self.platform.conda_launcher_name());

        if self.fs.path_exists(&candidate).await {
            debug!(path = %candidate.display(), "Found conda next to a known interpreter");
            Some(candidate)
        } else {
            debug!(
                path = %candidate.display(),
                "Conda launcher missing next to known interpreter"
            );
            None
        }
    }
}

/// Newest Conda interpreter among `interpreters`.
///
/// Entries without a version are never chosen. On equal versions the
/// earliest entry wins.
pub fn latest_conda_interpreter(interpreters: &[InterpreterInfo]) -> Option<&InterpreterInfo> {
    interpreters
        .iter()
        .filter(|i| is_conda_environment(i))
        .filter_map(|i| {
            let version = i.version.as_deref().filter(|v| !v.trim().is_empty())?;
            Some((i, version))
        })
        .fold(None::<(&InterpreterInfo, &str)>, |best, (i, version)| match best {
            Some((_, best_version))
                if compare_versions(version, best_version) != Ordering::Greater =>
            {
                best
            }
            _ => Some((i, version)),
        })
        .map(|(i, _)| i)
}
