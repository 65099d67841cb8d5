//! Entry point combining the locator and the discoverer

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::config::DiscoveryConfig;
use crate::discovery::CondaDiscoverer;
use crate::info::CondaInfo;
use crate::interpreter::InterpreterRecord;
use crate::locator::CondaLocator;
use crate::lookup::{InterpreterLookup, StaticLookup};
use crate::system::{FileSystem, ProcessRunner, TokioFileSystem, TokioProcessRunner};

/// Lists the Conda interpreters installed on this machine.
pub struct CondaEnvService {
    locator: CondaLocator,
    discoverer: CondaDiscoverer,
}

impl CondaEnvService {
    /// Service backed by real processes and the real filesystem.
    ///
    /// The configuration's `[[interpreters]]` entries, if any, serve as the
    /// secondary lookup.
    pub fn new(config: &DiscoveryConfig) -> Self {
        let lookup = StaticLookup::new(config.interpreters.clone());
        let lookup: Option<Arc<dyn InterpreterLookup>> = if lookup.is_empty() {
            None
        } else {
            Some(Arc::new(lookup))
        };
        Self::with_collaborators(
            config,
            Arc::new(TokioProcessRunner),
            Arc::new(TokioFileSystem),
            lookup,
        )
    }

    /// Service with explicit collaborators.
    pub fn with_collaborators(
        config: &DiscoveryConfig,
        runner: Arc<dyn ProcessRunner>,
        fs: Arc<dyn FileSystem>,
        lookup: Option<Arc<dyn InterpreterLookup>>,
    ) -> Self {
        let mut locator = CondaLocator::new(config, Arc::clone(&fs));
        if let Some(lookup) = lookup {
            locator = locator.with_lookup(lookup);
        }
        let discoverer = CondaDiscoverer::new(runner, fs, config.platform());
        Self {
            locator,
            discoverer,
        }
    }

    /// Locate conda, ask it for its environments and return the validated
    /// interpreters. Always succeeds; an empty list means "nothing to offer".
    pub async fn get_interpreters(&self) -> Vec<InterpreterRecord> {
        let conda = self.locator.conda_file().await;
        let interpreters = self.discoverer.interpreters(&conda).await;
        debug!(count = interpreters.len(), "Conda discovery finished");
        interpreters
    }

    /// The conda binary discovery would invoke.
    pub async fn conda_file(&self) -> PathBuf {
        self.locator.conda_file().await
    }

    /// Raw `conda info --json` descriptor from an already located binary,
    /// or `None` when it printed nothing.
    pub async fn fetch_info(&self, conda: &Path) -> crate::Result<Option<CondaInfo>> {
        self.discoverer.fetch_info(conda).await
    }
}
