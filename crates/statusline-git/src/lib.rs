// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! statusline-git: working-tree inspection for the statusline generator
//!
//! This library crate answers three questions about a candidate directory:
//! which branch is checked out, how many lines the tracked files have
//! gained and lost since the last commit, and how many lines the untracked
//! files carry. Git is treated as an opaque command-line collaborator;
//! every query is bounded by a timeout and degrades to "no information"
//! instead of failing.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use statusline_git::RepoInspector;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let inspector = RepoInspector::new(".");
//!     if let Some(branch) = inspector.branch().await {
//!         let stats = inspector.change_stats().await;
//!         println!("{branch}: +{}, -{}", stats.insertions, stats.deletions);
//!     }
//! }
//! ```

mod command;
pub mod error;
pub mod inspector;
pub mod stats;

pub use error::GitError;
pub use inspector::{DEFAULT_COMMAND_TIMEOUT, RepoInspector};
pub use stats::ChangeStats;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::GitError;
    pub use crate::inspector::RepoInspector;
    pub use crate::stats::ChangeStats;
}
