//! Shell command execution for the navigator.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Outcome of one shell invocation: the exit code plus combined output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellOutput {
    pub code: i32,
    pub output: String,
}

impl ShellOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Executes shell-style command strings in a given working directory.
///
/// Command strings are handed to a POSIX shell verbatim, so pipes and quoting
/// keep their usual meaning. Callers interpolate revisions and file names
/// without escaping; paths containing shell metacharacters are not supported.
#[async_trait::async_trait]
pub trait ShellRunner: Send + Sync {
    /// Run `command` with `dir` as the working directory.
    async fn run(&self, command: &str, dir: &Path) -> io::Result<ShellOutput>;

    /// The directory commands run in when no session supplies one.
    fn cwd(&self) -> io::Result<PathBuf>;
}

/// Production runner backed by `sh -c`.
pub struct SystemShell;

#[async_trait::async_trait]
impl ShellRunner for SystemShell {
    async fn run(&self, command: &str, dir: &Path) -> io::Result<ShellOutput> {
        debug!(command, dir = %dir.display(), "running shell command");

        let result = tokio::process::Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(dir)
            .output()
            .await?;

        let mut output = String::from_utf8_lossy(&result.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&result.stderr));

        // A signal-killed process has no exit code; report -1 so callers
        // still see a failure.
        Ok(ShellOutput {
            code: result.status.code().unwrap_or(-1),
            output,
        })
    }

    fn cwd(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}
