//! # gsr
//!
//! `gsr` runs `git status` recursively: it scans a directory tree for git
//! repositories and reports, for each, whether it has uncommitted changes or
//! is ahead/behind its upstream, optionally fetching or fast-forward pulling
//! first. It powers the `gsr` CLI tool.
//!
//! ## Core Features
//!
//! - **Fast Discovery**: Parallel repository scanning using `ignore`.
//! - **Bounded Concurrency**: Status checks run in parallel under a
//!   semaphore admission gate; when no slot is free a check runs inline
//!   instead of queuing, so nothing is ever dropped.
//! - **Atomic Output**: Each repository's path/status block is emitted under
//!   a single lock and never interleaves with another repository's.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gsr::core::{run_scan, ScanConfig};
//! use gsr::output::Printer;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(ScanConfig::default());
//!     let printer = Arc::new(Printer::stdout(&config));
//!     run_scan(Path::new("."), config, printer).await
//! }
//! ```

pub mod cli;
pub mod core;
pub mod git;
pub mod output;
