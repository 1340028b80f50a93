//! Configuration and scan constants

use crate::cli::Cli;

// Directories to skip during repository search
pub const SKIP_DIRECTORIES: &[&str] = &[
    "node_modules",
    "vendor",
    "target",
    "build",
    ".next",
    "dist",
    "__pycache__",
    ".venv",
    "venv",
];

// Repository discovery configuration
pub const GHQ_SCAN_DEPTH: usize = 4; // ghq lays repos out as root/host/owner/repo
pub const DISCOVERY_CHANNEL_CAPACITY: usize = 128;
pub const MAX_WALKER_THREADS: usize = 8;

/// Determines the concurrency limit for repository checks
///
/// Priority order:
/// 1. `--jobs N` flag (or `GSR_JOBS`) → N, floored at 1
/// 2. Default → available hardware parallelism
pub fn get_concurrency(jobs: Option<usize>) -> usize {
    match jobs {
        Some(n) => n.max(1),
        None => num_cpus::get(),
    }
}

/// Resolved scan configuration shared by the scheduler, checker and printer
#[derive(Clone, Debug)]
pub struct ScanConfig {
    pub show_status: bool,
    pub show_ahead: bool,
    pub show_behind: bool,
    pub show_all: bool,
    pub fetch: bool,
    pub pull: bool,
    pub concurrency: usize,
    /// Walk depth bound; `None` recurses fully. A `ghq`-derived root is
    /// bounded because its layout is fixed at host/owner/repo.
    pub max_depth: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            show_status: false,
            show_ahead: false,
            show_behind: false,
            show_all: false,
            fetch: false,
            pull: false,
            concurrency: get_concurrency(None),
            max_depth: None,
        }
    }
}

impl ScanConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            show_status: cli.status,
            show_ahead: cli.ahead,
            show_behind: cli.behind,
            show_all: cli.all,
            fetch: cli.fetch,
            pull: cli.pull,
            concurrency: get_concurrency(cli.jobs),
            max_depth: if cli.root.is_some() {
                None
            } else {
                Some(GHQ_SCAN_DEPTH)
            },
        }
    }

    /// Whether the ahead/behind computation is needed at all
    pub fn wants_tracking(&self) -> bool {
        self.show_ahead || self.show_behind
    }
}
