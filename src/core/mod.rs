//! Core scanning pipeline: configuration, discovery and scheduling

pub mod config;
pub mod discovery;
pub mod scheduler;

pub use config::{get_concurrency, ScanConfig};
pub use discovery::{spawn_walker, DiscoveryItem};
pub use scheduler::run_scan;
