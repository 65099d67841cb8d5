//! In-memory collaborators for discovery tests.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use conda_discovery::{FileSystem, ProcessOutput, ProcessRunner};
use tokio::sync::Barrier;

/// A [`ProcessRunner`] that returns canned output and records every call.
pub struct FakeProcessRunner {
    response: Response,
    calls: Mutex<Vec<(PathBuf, Vec<String>)>>,
}

enum Response {
    Output(ProcessOutput),
    NotFound,
}

impl FakeProcessRunner {
    /// Succeed with `stdout` and exit code 0.
    pub fn with_stdout(stdout: impl Into<String>) -> Self {
        Self::with_output(stdout, Some(0))
    }

    /// Return `stdout` with an arbitrary exit code.
    pub fn with_output(stdout: impl Into<String>, status: Option<i32>) -> Self {
        Self {
            response: Response::Output(ProcessOutput {
                stdout: stdout.into(),
                status,
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Behave like a binary that cannot be found.
    pub fn not_found() -> Self {
        Self {
            response: Response::NotFound,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Programs and arguments seen so far, in call order.
    pub fn calls(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for FakeProcessRunner {
    async fn execute(&self, program: &Path, args: &[&str]) -> io::Result<ProcessOutput> {
        self.calls.lock().unwrap().push((
            program.to_path_buf(),
            args.iter().map(|a| a.to_string()).collect(),
        ));
        match &self.response {
            Response::Output(output) => Ok(output.clone()),
            Response::NotFound => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: command not found", program.display()),
            )),
        }
    }
}

/// A [`FileSystem`] where exactly the registered paths exist.
#[derive(Default)]
pub struct FakeFileSystem {
    existing: HashSet<PathBuf>,
    checked: Mutex<Vec<PathBuf>>,
}

impl FakeFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register paths as existing.
    pub fn with_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            existing: paths.into_iter().map(Into::into).collect(),
            checked: Mutex::new(Vec::new()),
        }
    }

    /// Every path that was queried, in call order.
    pub fn checked(&self) -> Vec<PathBuf> {
        self.checked.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileSystem for FakeFileSystem {
    async fn path_exists(&self, path: &Path) -> bool {
        self.checked.lock().unwrap().push(path.to_path_buf());
        self.existing.contains(path)
    }
}

/// A [`FileSystem`] whose checks only complete once `n` of them are in
/// flight at the same time. Every path exists.
///
/// Checks issued one after another never get past the barrier, so a caller
/// that does not run them concurrently hangs.
pub struct BarrierFileSystem {
    barrier: Barrier,
}

impl BarrierFileSystem {
    pub fn new(n: usize) -> Self {
        Self {
            barrier: Barrier::new(n),
        }
    }
}

#[async_trait]
impl FileSystem for BarrierFileSystem {
    async fn path_exists(&self, _path: &Path) -> bool {
        self.barrier.wait().await;
        true
    }
}
