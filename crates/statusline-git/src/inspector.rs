// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Working-tree inspection via read-only git queries
//!
//! [`RepoInspector`] wraps a candidate directory and issues a small fixed
//! set of queries against it: branch name, tracked diff statistics, and
//! untracked line counts. Every operation degrades to "no information"
//! (`None` or zero) on any failure - a missing git binary, a non-repository
//! directory, a timeout - because a status line must render something
//! quickly rather than report why it couldn't.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::process::Command;
use tracing::debug;

use crate::command::{capture_stdout, git_command};
use crate::stats::{ChangeStats, parse_numstat, parse_wc_total};

/// Default upper bound for each collaborator invocation
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(1);

/// Read-only inspector for a candidate working tree
#[derive(Debug, Clone)]
pub struct RepoInspector {
    dir: PathBuf,
    timeout: Duration,
}

impl RepoInspector {
    /// Create an inspector for the given directory with the default timeout
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    /// Override the per-command timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The directory under inspection
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The enforced per-command timeout
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run a git query, degrading every failure to `None`.
    async fn run_git(&self, args: &[&str]) -> Option<String> {
        let label = format!("git {}", args.join(" "));
        match capture_stdout(git_command(&self.dir, args), &label, self.timeout).await {
            Ok(stdout) => Some(stdout),
            Err(err) => {
                debug!(dir = %self.dir.display(), error = %err, "git query degraded");
                None
            }
        }
    }

    /// Resolve the checked-out branch name.
    ///
    /// Returns `None` when the directory is not inside a repository, the
    /// query fails or times out, or git is not installed. Callers treat
    /// `None` as "suppress all git-derived output".
    pub async fn branch(&self) -> Option<String> {
        let branch = self
            .run_git(&["rev-parse", "--abbrev-ref", "HEAD"])
            .await?;
        if branch.is_empty() { None } else { Some(branch) }
    }

    /// Sum insertions and deletions across tracked files changed since HEAD.
    ///
    /// Binary files contribute zero to both counters. A failed or timed-out
    /// query degrades to `(0, 0)`.
    pub async fn diff_stats(&self) -> ChangeStats {
        match self
            .run_git(&["-c", "core.filemode=false", "diff", "HEAD", "--numstat"])
            .await
        {
            Some(numstat) => parse_numstat(&numstat),
            None => ChangeStats::default(),
        }
    }

    /// Count the total lines across untracked, non-ignored files.
    ///
    /// The listing honors ignore rules (`--exclude-standard`) and disables
    /// path quoting so non-ASCII filenames come back verbatim. A file that
    /// vanishes between listing and counting contributes zero. Counting
    /// prefers one bulk `wc -l` over the whole candidate set and falls back
    /// to per-file reads when the bulk count is unavailable; both paths
    /// count newline bytes and agree on the result.
    pub async fn untracked_line_count(&self) -> u64 {
        let Some(listing) = self
            .run_git(&[
                "-c",
                "core.quotepath=off",
                "ls-files",
                "--others",
                "--exclude-standard",
            ])
            .await
        else {
            return 0;
        };

        let files: Vec<PathBuf> = listing
            .lines()
            .filter(|line| !line.is_empty())
            .map(|relative| self.dir.join(relative))
            .filter(|path| path.is_file())
            .collect();
        if files.is_empty() {
            return 0;
        }

        match self.bulk_line_count(&files).await {
            Some(total) => total,
            None => direct_line_count(&files),
        }
    }

    /// One `wc -l` over the whole file set; `None` means "fall back".
    async fn bulk_line_count(&self, files: &[PathBuf]) -> Option<u64> {
        let mut command = Command::new("wc");
        command.arg("-l").args(files);
        match capture_stdout(command, "wc -l", self.timeout).await {
            Ok(output) => parse_wc_total(&output, files.len()),
            Err(err) => {
                debug!(dir = %self.dir.display(), error = %err, "bulk line count degraded");
                None
            }
        }
    }

    /// Aggregate tracked and untracked changes into one summary.
    ///
    /// Untracked line counts are added entirely to `insertions`: untracked
    /// content is all new. The two sources are disjoint by construction
    /// (tracked diff vs. `--others`), so nothing is double counted.
    pub async fn change_stats(&self) -> ChangeStats {
        let mut stats = self.diff_stats().await;
        stats += ChangeStats::new(self.untracked_line_count().await, 0);
        stats
    }
}

/// Per-file fallback: count newline bytes with direct reads.
///
/// Used when the bulk `wc -l` path is unavailable; both count
/// newline-terminated lines and must agree on any file set. A file that
/// cannot be read (vanished since listing, permissions) contributes zero.
pub fn direct_line_count(files: &[PathBuf]) -> u64 {
    files
        .iter()
        .map(|path| match std::fs::read(path) {
            Ok(bytes) => bytes.iter().filter(|byte| **byte == b'\n').count() as u64,
            Err(_) => 0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_timeout() {
        let inspector = RepoInspector::new("/tmp").with_timeout(Duration::from_millis(250));
        assert_eq!(inspector.timeout(), Duration::from_millis(250));
        assert_eq!(inspector.dir(), Path::new("/tmp"));
    }

    #[test]
    fn default_timeout_is_one_second() {
        let inspector = RepoInspector::new(".");
        assert_eq!(inspector.timeout(), DEFAULT_COMMAND_TIMEOUT);
    }

    #[test]
    fn direct_count_sums_newlines() {
        let dir = std::env::temp_dir().join(format!("statusline-direct-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let a = dir.join("a.txt");
        let b = dir.join("b.txt");
        std::fs::write(&a, "1\n2\n").expect("write a");
        std::fs::write(&b, "1\n2\n3\n").expect("write b");
        assert_eq!(direct_line_count(&[a, b]), 5);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn direct_count_tolerates_missing_files() {
        let missing = PathBuf::from("/nonexistent/statusline/file.txt");
        assert_eq!(direct_line_count(&[missing]), 0);
    }
}
