//! Running `conda info --json` and turning its output into interpreter
//! records.

use std::path::Path;
use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;

use crate::display::{CONDA_COMPANY_NAME, display_name, environment_display_name};
use crate::error::Result;
use crate::info::CondaInfo;
use crate::interpreter::InterpreterRecord;
use crate::platform::Platform;
use crate::system::{FileSystem, ProcessRunner};

/// Arguments passed to conda to obtain its self-description
pub const CONDA_INFO_ARGS: [&str; 2] = ["info", "--json"];

/// Discovers Conda environments through a given conda binary
pub struct CondaDiscoverer {
    runner: Arc<dyn ProcessRunner>,
    fs: Arc<dyn FileSystem>,
    platform: Platform,
}

impl CondaDiscoverer {
    pub fn new(runner: Arc<dyn ProcessRunner>, fs: Arc<dyn FileSystem>, platform: Platform) -> Self {
        Self {
            runner,
            fs,
            platform,
        }
    }

    /// All validated interpreters reachable through `conda`.
    ///
    /// Never fails: a missing binary, unreadable output or an unexpected
    /// JSON shape all yield an empty list.
    pub async fn interpreters(&self, conda: &Path) -> Vec<InterpreterRecord> {
        match self.discover(conda).await {
            Ok(records) => records,
            Err(e) => {
                debug!(conda = %conda.display(), error = %e, "Cannot list Conda interpreters");
                Vec::new()
            }
        }
    }

    /// Like [`interpreters`](Self::interpreters) but reports parse failures.
    pub async fn discover(&self, conda: &Path) -> Result<Vec<InterpreterRecord>> {
        match self.fetch_info(conda).await? {
            Some(info) => Ok(self.interpreters_from_info(&info).await),
            None => Ok(Vec::new()),
        }
    }

    /// Run `conda info --json` and parse its standard output.
    ///
    /// Exit status is ignored. A binary that cannot be started behaves like
    /// one that printed nothing, yielding `Ok(None)`.
    pub async fn fetch_info(&self, conda: &Path) -> Result<Option<CondaInfo>> {
        let stdout = match self.runner.execute(conda, &CONDA_INFO_ARGS).await {
            Ok(output) => {
                if output.status != Some(0) {
                    debug!(conda = %conda.display(), status = ?output.status, "conda info exited unsuccessfully");
                }
                output.stdout
            }
            Err(e) => {
                debug!(conda = %conda.display(), error = %e, "Failed to run conda");
                String::new()
            }
        };

        CondaInfo::parse(&stdout)
    }

    /// Build records for every environment in `info` whose interpreter
    /// exists on disk.
    ///
    /// Order follows `envs`, with `default_prefix` last. Existence checks run
    /// concurrently and are all awaited.
    pub async fn interpreters_from_info(&self, info: &CondaInfo) -> Vec<InterpreterRecord> {
        let candidates = self.candidates(info);

        let checks = candidates.iter().map(|c| self.fs.path_exists(&c.path));
        let exists = join_all(checks).await;

        candidates
            .into_iter()
            .zip(exists)
            .filter_map(|(candidate, exists)| {
                if !exists {
                    debug!(path = %candidate.path.display(), "Dropping missing Conda interpreter");
                }
                exists.then_some(candidate)
            })
            .collect()
    }

    fn candidates(&self, info: &CondaInfo) -> Vec<InterpreterRecord> {
        let base_name = display_name(info);

        info.environment_roots()
            .into_iter()
            .map(|root| {
                let root_path = Path::new(root);
                let display_name = if root == info.default_prefix {
                    base_name.clone()
                } else {
                    let env_name = root_path
                        .file_name()
                        .map(|name| name.to_string_lossy())
                        .unwrap_or_else(|| root.into());
                    environment_display_name(&base_name, &env_name)
                };

                InterpreterRecord {
                    path: self.platform.python_path(root_path),
                    display_name,
                    company_display_name: CONDA_COMPANY_NAME.to_string(),
                }
            })
            .collect()
    }
}
