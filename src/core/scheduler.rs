//! Bounded-parallel dispatch of repository checks
//!
//! The admission gate is a semaphore with non-blocking acquisition: a free
//! slot spawns the check onto the runtime, no free slot runs it inline on
//! the scheduler's own task. Inline execution stalls discovery consumption
//! until the check finishes, which bounds in-flight external pipelines
//! without dropping or queuing repositories.

use anyhow::{bail, Context, Result};
use futures::future::FutureExt;
use futures::stream::{FuturesUnordered, StreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tokio::sync::Semaphore;

use crate::core::config::ScanConfig;
use crate::core::discovery::{self, DiscoveryItem};
use crate::git::checker;
use crate::output::Printer;

/// Checks one repository and publishes the result. A failure is reported on
/// the error stream and the repository contributes nothing to output; it
/// never aborts other in-flight work.
async fn check_and_publish(path: PathBuf, config: &ScanConfig, printer: &Printer) {
    match checker::check_repo(&path, config, printer).await {
        Ok(report) => printer.publish(&report),
        Err(err) => log::error!("{}: {:#}", path.display(), err),
    }
}

fn log_if_panicked(joined: Result<(), tokio::task::JoinError>) {
    if let Err(err) = joined {
        log::error!("repository check task failed: {err}");
    }
}

/// Consumes the discovery stream and dispatches each repository under the
/// admission gate. Returns only after every dispatched check, spawned and
/// inline alike, has finished.
pub async fn run(mut rx: Receiver<DiscoveryItem>, config: Arc<ScanConfig>, printer: Arc<Printer>) {
    let semaphore = Arc::new(Semaphore::new(config.concurrency));
    let mut in_flight = FuturesUnordered::new();

    while let Some(item) = rx.recv().await {
        let path = match item {
            DiscoveryItem::Repo(path) => path,
            DiscoveryItem::Error(err) => {
                log::warn!("discovery: {err}");
                continue;
            }
        };

        match Arc::clone(&semaphore).try_acquire_owned() {
            Ok(permit) => {
                let config = Arc::clone(&config);
                let printer = Arc::clone(&printer);
                in_flight.push(tokio::spawn(async move {
                    let _permit = permit;
                    check_and_publish(path, &config, &printer).await;
                }));
            }
            // No free slot: run inline instead of queuing, stalling further
            // discovery consumption until this check completes.
            Err(_) => check_and_publish(path, &config, &printer).await,
        }

        // Reap already-finished workers so the set tracks in-flight work
        // rather than growing with the total repository count.
        while let Some(Some(joined)) = in_flight.next().now_or_never() {
            log_if_panicked(joined);
        }
    }

    while let Some(joined) = in_flight.next().await {
        log_if_panicked(joined);
    }
}

/// One full scan over `root`: wires the walker to the scheduler and awaits
/// both. A missing root is the only fatal error.
pub async fn run_scan(root: &Path, config: Arc<ScanConfig>, printer: Arc<Printer>) -> Result<()> {
    if !root.is_dir() {
        bail!("[{}] does not exist", root.display());
    }

    let (walker, rx) = discovery::spawn_walker(root, config.max_depth);
    run(rx, config, printer).await;
    walker.await.context("discovery walker panicked")?;
    Ok(())
}
