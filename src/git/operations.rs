//! External process primitives
//!
//! Every external invocation blocks only its own task; there is no timeout
//! and no retry anywhere in the pipeline. A transient failure is reported
//! once and the repository is omitted from that run's output.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Captured output of one git invocation
#[derive(Debug)]
pub struct GitOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    /// Combined stdout and stderr, roughly as a terminal would have shown them
    pub fn combined(&self) -> String {
        let mut text = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&self.stderr);
        }
        text
    }
}

/// Runs a git command with the working directory set to `path` and captures
/// its output verbatim.
///
/// Only a process that fails to start is an error here. A non-zero exit is
/// surfaced through `success` because callers assign it different meanings
/// (a failed `diff --quiet` means a dirty tree, a failed `pull --ff-only`
/// means a real problem).
pub async fn run_git(path: &Path, args: &[&str]) -> Result<GitOutput> {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .await
        .with_context(|| format!("failed to run `git {}` in {}", args.join(" "), path.display()))?;

    Ok(GitOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Resolves the default scan root by asking `ghq` for its root directory.
/// Any failure here is fatal to the whole run.
pub async fn resolve_default_root() -> Result<PathBuf> {
    let output = Command::new("ghq")
        .arg("root")
        .output()
        .await
        .context("failed to run `ghq root`")?;

    if !output.status.success() {
        bail!(
            "`ghq root` exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let root = String::from_utf8_lossy(&output.stdout)
        .trim_end_matches('\n')
        .to_string();
    Ok(PathBuf::from(root))
}
