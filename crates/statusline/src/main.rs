//! statusline: one-line, git-aware status rendering for an assistant host
//!
//! Reads one JSON object from standard input (model display name, workspace
//! directory), queries the directory's working tree for branch and change
//! statistics, and prints exactly one formatted line on standard output.
//! Every git query is timeout-bounded and best-effort; only a malformed
//! input payload is fatal.

use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};

use statusline::config::Config;
use statusline::format::{self, GitSegment};
use statusline::input::StatusInput;
use statusline_git::RepoInspector;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let mut config = Config::parse();
    init_tracing(&config);

    if let Err(err) = config.validate() {
        warn!(error = %err, "ignoring directory override");
        config.dir = None;
    }

    let input = match read_input() {
        Ok(input) => input,
        Err(err) => {
            debug!(error = %err, "could not read status payload");
            println!("[Error reading input]");
            return ExitCode::FAILURE;
        }
    };

    let dir = config.resolve_dir(input.current_dir());
    let git = if dir.is_empty() {
        None
    } else {
        inspect(&dir, &config).await
    };

    println!(
        "{}",
        format::status_line(input.model_display_name(), &dir, git.as_ref())
    );
    ExitCode::SUCCESS
}

/// Initialize the tracing subscriber.
///
/// Logs go to stderr: stdout carries only the status line.
fn init_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();
}

/// Read and parse the JSON payload from standard input.
fn read_input() -> anyhow::Result<StatusInput> {
    let mut payload = String::new();
    std::io::stdin()
        .read_to_string(&mut payload)
        .context("reading standard input")?;
    StatusInput::from_json(&payload).context("parsing status payload")
}

/// Query the working tree, suppressing the whole segment when the branch
/// cannot be resolved (not a repository, missing git, timeout).
async fn inspect(dir: &str, config: &Config) -> Option<GitSegment> {
    let inspector = RepoInspector::new(dir).with_timeout(config.timeout());
    let branch = inspector.branch().await?;
    let stats = inspector.change_stats().await;
    Some(GitSegment { branch, stats })
}
