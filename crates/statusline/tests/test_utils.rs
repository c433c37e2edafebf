// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test utilities for statusline integration tests
//!
//! This module provides utilities for:
//! - Temporary directory management
//! - Git repository scaffolding for tests
//! - Spawning the statusline binary with a stdin payload

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicU32, Ordering};

/// Counter for generating unique test directory names
static TEST_DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

/// A temporary directory that is automatically cleaned up when dropped
pub struct TempTestDir {
    path: PathBuf,
}

impl TempTestDir {
    /// Create a new temporary test directory
    ///
    /// The directory is created under the system temp directory with a
    /// unique name based on the test name, process id, and a counter.
    pub fn new(test_name: &str) -> Self {
        let counter = TEST_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir_name = format!(
            "statusline-test-{}-{}-{}",
            test_name,
            std::process::id(),
            counter
        );
        let path = std::env::temp_dir().join(dir_name);
        fs::create_dir_all(&path).expect("Failed to create temp test directory");
        Self { path }
    }

    /// Get the path to the temporary directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a file within the temp directory with the given content
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(relative_path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }
}

impl Drop for TempTestDir {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}

/// A temporary git repository for testing
///
/// Creates a real repository with user config set, ready for commits.
pub struct TestGitRepo {
    temp_dir: TempTestDir,
}

impl TestGitRepo {
    /// Create and initialize a new test git repository
    pub fn new(test_name: &str) -> Self {
        let temp_dir = TempTestDir::new(test_name);
        let repo = Self { temp_dir };
        repo.git(&["init"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "user.name", "Test Author"]);
        repo
    }

    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file without staging it (leaves it untracked)
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        self.temp_dir.create_file(relative_path, content)
    }

    /// Create a file, stage it, and commit it
    pub fn create_and_commit(&self, relative_path: &str, content: &str, message: &str) {
        self.create_file(relative_path, content);
        self.git(&["add", relative_path]);
        self.git(&["commit", "-m", message]);
    }

    /// Run a git command in the repository
    pub fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .current_dir(self.path())
            .args(args)
            .output()
            .expect("Failed to run git command");
        assert!(
            output.status.success(),
            "Git command failed: git {}\nstderr: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// Spawn the statusline binary with the given arguments, environment
/// overrides, and stdin payload, and wait for it to finish.
#[allow(dead_code)]
pub fn run_statusline(payload: &str, args: &[&str], envs: &[(&str, &str)]) -> Output {
    use std::io::Write;

    let mut command = Command::new(env!("CARGO_BIN_EXE_statusline"));
    command
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in envs {
        command.env(key, value);
    }

    let mut child = command.spawn().expect("Failed to spawn statusline");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(payload.as_bytes())
        .expect("Failed to write stdin payload");
    child
        .wait_with_output()
        .expect("Failed to wait for statusline")
}

/// Extract stdout as UTF-8 text
#[allow(dead_code)]
pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
