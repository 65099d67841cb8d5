//! Shared test utilities for the conda-discovery workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fakes`]: in-memory [`ProcessRunner`](conda_discovery::ProcessRunner)
//!   and [`FileSystem`](conda_discovery::FileSystem) doubles
//! - [`tree`]: [`CondaTree`] builder for an on-disk Conda installation

pub mod fakes;
pub mod tree;

pub use fakes::{BarrierFileSystem, FakeFileSystem, FakeProcessRunner};
pub use tree::CondaTree;
