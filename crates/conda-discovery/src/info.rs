//! The JSON document printed by `conda info --json`

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// Parsed output of `conda info --json`.
///
/// Every field is optional in the wire format. A missing key and an explicit
/// `null` both deserialize to the field's empty default, so consumers never
/// have to distinguish them. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CondaInfo {
    /// Environment root directories
    #[serde(deserialize_with = "null_as_default")]
    pub envs: Vec<String>,
    /// Free-form interpreter banner, e.g. `3.6.1 |Anaconda 4.4.0 (64-bit)| ...`
    #[serde(rename = "sys.version", deserialize_with = "null_as_default")]
    pub sys_version: String,
    /// Root (base) environment
    #[serde(deserialize_with = "null_as_default")]
    pub default_prefix: String,
    #[serde(deserialize_with = "null_as_default")]
    pub conda_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub python_version: String,
    /// Conda subdir, e.g. `linux-64`, `osx-arm64`, `win-32`
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl CondaInfo {
    /// Parse `conda info --json` output.
    ///
    /// Blank output yields `Ok(None)`; anything that is not a JSON object of
    /// the expected shape is an [`Error::InvalidInfo`](crate::Error::InvalidInfo).
    pub fn parse(output: &str) -> Result<Option<Self>> {
        if output.trim().is_empty() {
            return Ok(None);
        }
        let info = serde_json::from_str(output)?;
        Ok(Some(info))
    }

    /// Candidate environment roots: every `envs` entry in order, then
    /// `default_prefix` if set.
    ///
    /// Duplicates are kept; conda lists the root environment in `envs` too,
    /// so it usually appears twice.
    pub fn environment_roots(&self) -> Vec<&str> {
        let mut roots: Vec<&str> = self.envs.iter().map(String::as_str).collect();
        if !self.default_prefix.is_empty() {
            roots.push(&self.default_prefix);
        }
        roots
    }
}
