//! Configuration resolution for the CLI
//!
//! Resolution order:
//! - `--config FILE` (or `CONDA_ENVS_CONFIG`), which must exist
//! - `<config dir>/conda-envs/config.toml` if present
//! - built-in defaults
//!
//! `--conda PATH` is applied on top of whichever was loaded.

use std::path::{Path, PathBuf};

use conda_discovery::DiscoveryConfig;
use tracing::debug;

use crate::error::Result;

/// Directory name under the platform config dir
const CONFIG_DIR_NAME: &str = "conda-envs";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration file location, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Build the effective configuration from CLI flags.
pub fn resolve_config(explicit: Option<&Path>, conda: Option<&Path>) -> Result<DiscoveryConfig> {
    let config = match explicit {
        Some(path) => {
            debug!(path = %path.display(), "Loading config");
            DiscoveryConfig::load(path)?
        }
        None => match default_config_path().filter(|p| p.is_file()) {
            Some(path) => {
                debug!(path = %path.display(), "Loading default config");
                DiscoveryConfig::load(&path)?
            }
            None => DiscoveryConfig::default(),
        },
    };

    Ok(match conda {
        Some(path) => config.with_conda_path(path),
        None => config,
    })
}
