//! Timeout-bounded subprocess execution
//!
//! All external collaborators (`git`, `wc`) are read-only queries that must
//! not stall status rendering, so every invocation runs with an enforced
//! deadline and the child is killed, not abandoned, when it fires.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::error::GitError;

/// Build a git invocation scoped to the given working directory.
pub(crate) fn git_command(dir: &Path, args: &[&str]) -> Command {
    let mut command = Command::new("git");
    command.current_dir(dir).args(args);
    command
}

/// Run a command and capture its trimmed stdout.
///
/// The child inherits nothing: stdin is closed, stderr is discarded, and
/// stdout is piped. `kill_on_drop` ensures a timed-out child is terminated
/// when its future is dropped by the timeout.
pub(crate) async fn capture_stdout(
    mut command: Command,
    label: &str,
    timeout: Duration,
) -> Result<String, GitError> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    let output = tokio::time::timeout(timeout, command.output())
        .await
        .map_err(|_| GitError::TimedOut {
            command: label.to_string(),
            timeout,
        })?
        .map_err(|source| GitError::Io {
            command: label.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(GitError::CommandFailed {
            command: label.to_string(),
            status: output.status,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
