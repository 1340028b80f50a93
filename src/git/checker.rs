//! Per-repository status classification
//!
//! One checker invocation runs a small fixed protocol of git commands, all
//! scoped to the repository's working directory:
//!
//! `diff → [fetch] → [pull] → [status] → [ahead/behind]`
//!
//! Optional steps run only when the corresponding flag is set. A process
//! that fails to start aborts the remaining steps; the scheduler logs the
//! error and the repository is simply not published.

use anyhow::{bail, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::core::config::ScanConfig;
use crate::git::operations::run_git;
use crate::output::Printer;

// Git command arguments
const GIT_DIFF_QUIET_ARGS: &[&str] = &["diff", "--quiet"];
const GIT_FETCH_ARGS: &[&str] = &["fetch"];
const GIT_PULL_FF_ARGS: &[&str] = &["pull", "--ff-only"];
const GIT_STATUS_BRANCH_ARGS: &[&str] = &["status", "--porcelain", "--branch"];

// Marker tokens in the porcelain branch header, e.g.
// `## main...origin/main [ahead 1, behind 2]`. The patterns are a contract
// with git's machine-oriented output format; if that format ever drifts,
// `scan_tracking_header` is the one place to fix.
static AHEAD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[ahead").unwrap());
static BEHIND_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[behind").unwrap());

/// Classified state of one repository, built by exactly one checker
/// invocation and consumed exactly once by the printer.
#[derive(Clone, Debug, Default)]
pub struct RepoReport {
    /// Working directory of the repository (parent of its `.git` marker)
    pub path: PathBuf,
    /// Working tree has uncommitted modifications
    pub dirty: bool,
    /// Local branch has unpushed commits relative to its upstream
    pub ahead: bool,
    /// Local branch has unpulled commits relative to its upstream
    pub behind: bool,
    /// Verbatim `git status --porcelain --branch` output
    pub status_text: String,
}

/// Scans the porcelain branch-tracking header line for ahead/behind markers.
/// Returns `(ahead, behind)`.
pub fn scan_tracking_header(status_text: &str) -> (bool, bool) {
    let header = status_text
        .lines()
        .find(|line| line.starts_with("## "))
        .unwrap_or("");
    (AHEAD_RE.is_match(header), BEHIND_RE.is_match(header))
}

/// Classifies one repository's state.
///
/// Fetch and pull transcripts are printed immediately through the printer's
/// lock, independent of whether the repository later passes the display
/// filter.
pub async fn check_repo(path: &Path, config: &ScanConfig, printer: &Printer) -> Result<RepoReport> {
    let mut report = RepoReport {
        path: path.to_path_buf(),
        ..RepoReport::default()
    };

    // Exit 0 means clean; any non-zero exit reads as dirty. This is
    // deliberately coarse: an invocation that fails outright (say, a .git
    // marker that is not actually a repository) also counts as dirty rather
    // than being special-cased per exit code.
    let diff = run_git(path, GIT_DIFF_QUIET_ARGS).await?;
    report.dirty = !diff.success;

    if config.fetch {
        let fetch = run_git(path, GIT_FETCH_ARGS).await?;
        printer.emit_transcript(&fetch.combined());
    }

    if config.pull {
        let pull = run_git(path, GIT_PULL_FF_ARGS).await?;
        printer.emit_transcript(&pull.combined());
        if !pull.success {
            bail!("pull failed: {}", pull.stderr.trim());
        }
    }

    if config.show_status {
        let status = run_git(path, GIT_STATUS_BRANCH_ARGS).await?;
        report.status_text = status.stdout;
    }

    if config.wants_tracking() {
        let fresh;
        let text = if config.show_status {
            report.status_text.as_str()
        } else {
            fresh = run_git(path, GIT_STATUS_BRANCH_ARGS).await?.stdout;
            fresh.as_str()
        };
        let (ahead, behind) = scan_tracking_header(text);
        report.ahead = ahead;
        report.behind = behind;
    }

    Ok(report)
}
