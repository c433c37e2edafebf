// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Change statistics and parsers for the collaborator output formats
//!
//! The parsers here are pure text processing over the two formats the
//! inspector consumes: `git diff --numstat` (one `added<TAB>deleted<TAB>path`
//! record per changed file) and `wc -l` (per-file counts, with a trailing
//! `total` line when more than one file was counted). Both are best-effort:
//! malformed records contribute zero, never an error.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Summary of uncommitted line changes in a working tree
///
/// Untracked content is folded into `insertions` by the aggregator since
/// every untracked line is conceptually new.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStats {
    /// Total lines added
    pub insertions: u64,
    /// Total lines deleted
    pub deletions: u64,
}

impl ChangeStats {
    /// Create a summary from raw counters
    #[must_use]
    pub fn new(insertions: u64, deletions: u64) -> Self {
        Self {
            insertions,
            deletions,
        }
    }

    /// True when the working tree has no reportable changes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.insertions == 0 && self.deletions == 0
    }
}

impl Add for ChangeStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            insertions: self.insertions.saturating_add(other.insertions),
            deletions: self.deletions.saturating_add(other.deletions),
        }
    }
}

impl AddAssign for ChangeStats {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Sum per-file insertion/deletion counts from `git diff --numstat` output.
///
/// Each record is `added<TAB>deleted<TAB>path`. Binary files report `-` in
/// both numeric columns; any non-numeric field contributes zero to the
/// corresponding counter. Lines with fewer than two fields are skipped.
#[must_use]
pub fn parse_numstat(numstat: &str) -> ChangeStats {
    let mut stats = ChangeStats::default();

    for line in numstat.lines() {
        let mut fields = line.split('\t');
        let (Some(added), Some(deleted)) = (fields.next(), fields.next()) else {
            continue;
        };
        stats.insertions = stats
            .insertions
            .saturating_add(added.trim().parse::<u64>().unwrap_or(0));
        stats.deletions = stats
            .deletions
            .saturating_add(deleted.trim().parse::<u64>().unwrap_or(0));
    }

    stats
}

/// Extract the total from `wc -l` output over `file_count` files.
///
/// With a single file the count is on the first line (`"  42 path"`); with
/// several files it is on the trailing `"  42 total"` line. Returns `None`
/// when the output does not match either shape, which callers treat as
/// "bulk counting unavailable".
#[must_use]
pub fn parse_wc_total(output: &str, file_count: usize) -> Option<u64> {
    let line = if file_count <= 1 {
        output.lines().next()?
    } else {
        output.lines().last()?
    };
    line.split_whitespace().next()?.parse().ok()
}
