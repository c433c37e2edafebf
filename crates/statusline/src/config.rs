//! Configuration for the statusline generator
//!
//! The primary input is the JSON payload on standard input; the CLI only
//! carries operational knobs: the per-command timeout for git queries, an
//! optional working-directory override, and logging verbosity.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Default per-command timeout, in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 1_000;

/// statusline - git-aware status line generator
#[derive(Parser, Debug, Clone)]
#[command(name = "statusline")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Per-command timeout for git queries, in milliseconds
    ///
    /// Every collaborator invocation (branch query, diff summary,
    /// untracked listing, line counting) is independently bounded by
    /// this deadline; a timed-out query degrades to "no information".
    #[arg(long, env = "STATUSLINE_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Working directory override
    ///
    /// Takes precedence over `workspace.current_dir` from the stdin
    /// payload. Ignored with a warning if it is not a directory.
    #[arg(short, long, env = "STATUSLINE_DIR")]
    pub dir: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so stdout stays reserved for the
    /// status line itself.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            dir: None,
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Get the per-command timeout as a `Duration`
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Resolve the working directory, preferring the CLI override
    #[must_use]
    pub fn resolve_dir(&self, payload_dir: &str) -> String {
        match &self.dir {
            Some(dir) => dir.display().to_string(),
            None => payload_dir.to_string(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the directory override is specified but does
    /// not exist or is not a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.dir {
            if !dir.exists() {
                return Err(ConfigError::DirNotFound(dir.clone()));
            }
            if !dir.is_dir() {
                return Err(ConfigError::DirNotDirectory(dir.clone()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Directory override not found
    #[error("Directory override not found: {0}")]
    DirNotFound(PathBuf),

    /// Directory override is not a directory
    #[error("Directory override is not a directory: {0}")]
    DirNotDirectory(PathBuf),
}
