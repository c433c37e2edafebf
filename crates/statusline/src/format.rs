//! Status line rendering
//!
//! The output shape is `"[<model>] 📁 <dir>"`, optionally followed by
//! `" | 🌿 <branch>"` and a parenthesized change summary. Every segment
//! degrades by omission: no branch means no git suffix at all, zero
//! changes mean no parenthesized segment, and a zero term inside the
//! summary is dropped rather than printed as `+0`.

use statusline_git::ChangeStats;

/// Branch and change summary attached to the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitSegment {
    /// The checked-out branch name
    pub branch: String,
    /// Aggregated tracked + untracked change statistics
    pub stats: ChangeStats,
}

/// Render the full status line.
///
/// Inputs are operator-supplied text and are substituted verbatim.
#[must_use]
pub fn status_line(model: &str, dir: &str, git: Option<&GitSegment>) -> String {
    let mut line = format!("[{model}] \u{1F4C1} {dir}");
    if let Some(segment) = git {
        line.push_str(&format!(" | \u{1F33F} {}", segment.branch));
        if let Some(summary) = change_summary(&segment.stats) {
            line.push_str(&format!(" ({summary})"));
        }
    }
    line
}

/// Render the `+N, -M` summary, omitting zero terms.
///
/// Returns `None` when there is nothing to report.
#[must_use]
pub fn change_summary(stats: &ChangeStats) -> Option<String> {
    if stats.is_empty() {
        return None;
    }
    let mut terms = Vec::new();
    if stats.insertions > 0 {
        terms.push(format!("+{}", stats.insertions));
    }
    if stats.deletions > 0 {
        terms.push(format!("-{}", stats.deletions));
    }
    Some(terms.join(", "))
}
