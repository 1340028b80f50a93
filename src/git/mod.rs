//! Git process invocation and per-repository status classification

pub mod checker;
pub mod operations;

pub use checker::{check_repo, scan_tracking_header, RepoReport};
pub use operations::{resolve_default_root, run_git, GitOutput};
