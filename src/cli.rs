//! Command line interface definition
//!
//! Every boolean flag carries an environment-variable fallback so the tool
//! can be configured per-shell without repeating flags (`GSR_SHOW_STATUS=1
//! gsr` behaves like `gsr --status`). The fallbacks parse boolish values
//! (`1`/`0`, `true`/`false`, `yes`/`no`), matching the original tool's env
//! handling.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Run git status recursively
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gsr", version, about = "Run git status recursively")]
pub struct Cli {
    /// Show the porcelain status text for each reported repository
    #[arg(long, env = "GSR_SHOW_STATUS", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub status: bool,

    /// Show repositories that are ahead of their upstream
    #[arg(long, env = "GSR_SHOW_AHEAD", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub ahead: bool,

    /// Show repositories that are behind their upstream
    #[arg(long, env = "GSR_SHOW_BEHIND", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub behind: bool,

    /// Show every discovered repository regardless of state
    #[arg(long, env = "GSR_SHOW_ALL", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub all: bool,

    /// Run `git fetch` before checking status
    #[arg(long, env = "GSR_FETCH", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub fetch: bool,

    /// Run `git pull --ff-only` before checking status
    #[arg(long, env = "GSR_PULL", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub pull: bool,

    /// Maximum number of concurrent repository checks
    #[arg(long, value_name = "N", env = "GSR_JOBS")]
    pub jobs: Option<usize>,

    /// Root directory to scan; defaults to the `ghq root` directory
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,
}
