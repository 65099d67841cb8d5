//! Process and filesystem access used by discovery.
//!
//! Both are traits so that tests can substitute canned output and a virtual
//! filesystem. The tokio-backed implementations are the defaults.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Captured result of a finished subprocess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Standard output, lossily decoded as UTF-8
    pub stdout: String,
    /// Exit code, `None` if the process was terminated by a signal
    pub status: Option<i32>,
}

/// Runs an external program to completion.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `program` with `args` and capture its standard output.
    ///
    /// `program` may be a bare command name, resolved through `PATH`.
    async fn execute(&self, program: &Path, args: &[&str]) -> std::io::Result<ProcessOutput>;
}

/// Answers whether a path exists.
#[async_trait]
pub trait FileSystem: Send + Sync {
    async fn path_exists(&self, path: &Path) -> bool;
}

/// [`ProcessRunner`] backed by `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessRunner;

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn execute(&self, program: &Path, args: &[&str]) -> std::io::Result<ProcessOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await?;

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            status: output.status.code(),
        })
    }
}

/// [`FileSystem`] backed by `tokio::fs`. I/O errors count as "absent".
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

#[async_trait]
impl FileSystem for TokioFileSystem {
    async fn path_exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}
