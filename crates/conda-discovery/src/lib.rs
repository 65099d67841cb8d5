//! Discovery of Conda-managed Python interpreters.
//!
//! The pipeline has two halves:
//!
//! - [`CondaLocator`] decides which `conda` binary to run, preferring the
//!   launcher next to the newest Conda interpreter a secondary lookup knows
//!   about and otherwise falling back to `conda` on `PATH`.
//! - [`CondaDiscoverer`] runs `conda info --json`, expands the descriptor into
//!   one candidate per environment, checks the candidates against the
//!   filesystem concurrently and keeps the ones that exist.
//!
//! [`CondaEnvService::get_interpreters`] ties them together. It never fails:
//! a missing or broken conda installation simply yields no interpreters.

pub mod config;
pub mod discovery;
pub mod display;
pub mod error;
pub mod info;
pub mod interpreter;
pub mod locator;
pub mod lookup;
pub mod platform;
pub mod service;
pub mod system;
pub mod version;

pub use config::{DEFAULT_CONDA_COMMAND, DiscoveryConfig};
pub use discovery::CondaDiscoverer;
pub use display::{CONDA_COMPANY_NAME, CONDA_DISPLAY_NAME};
pub use error::{Error, Result};
pub use info::CondaInfo;
pub use interpreter::{InterpreterInfo, InterpreterRecord};
pub use locator::CondaLocator;
pub use lookup::{InterpreterLookup, StaticLookup};
pub use platform::Platform;
pub use service::CondaEnvService;
pub use system::{FileSystem, ProcessOutput, ProcessRunner, TokioFileSystem, TokioProcessRunner};
