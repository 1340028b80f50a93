//! gsr: run git status recursively across a workspace of repositories
//! Scans a directory tree for git repositories and reports which have
//! uncommitted changes or have diverged from their upstream.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::sync::Arc;

use gsr::cli::Cli;
use gsr::core::{run_scan, ScanConfig};
use gsr::git::resolve_default_root;
use gsr::output::Printer;

// Exit code when usage was shown instead of running a scan
const HELP_EXIT_CODE: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help means nothing was scanned; exit non-zero like the usage-error
        // path so scripts never mistake it for a clean empty run.
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            let _ = err.print();
            std::process::exit(HELP_EXIT_CODE);
        }
        Err(err) => err.exit(),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let root = match &cli.root {
        Some(root) => root.clone(),
        None => resolve_default_root().await?,
    };

    let config = Arc::new(ScanConfig::from_cli(&cli));
    let printer = Arc::new(Printer::stdout(&config));

    run_scan(&root, config, printer).await
}
