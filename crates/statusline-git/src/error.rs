// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for statusline-git

use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while querying the working tree
///
/// Public inspector operations translate every one of these into a
/// degraded value (`None` or zero); the variants exist so the reason
/// can be logged and asserted on in tests.
#[derive(Debug, Error)]
pub enum GitError {
    /// The child process could not be spawned or awaited
    #[error("I/O error running `{command}`: {source}")]
    Io {
        /// The command that failed
        command: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The child process did not finish within the allotted time
    #[error("`{command}` timed out after {timeout:?}")]
    TimedOut {
        /// The command that was killed
        command: String,
        /// The enforced upper bound
        timeout: Duration,
    },

    /// The child process exited with a non-zero status
    #[error("`{command}` exited with {status}")]
    CommandFailed {
        /// The command that failed
        command: String,
        /// The reported exit status
        status: ExitStatus,
    },
}
