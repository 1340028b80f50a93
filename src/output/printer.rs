//! Atomic result emission under concurrent producers
//!
//! Every concurrent checker (spawned or inline) funnels its output through
//! one `Printer`, whose sink lock is the single serialization point. A
//! repository's path line and optional status block are written under one
//! lock acquisition so blocks from different repositories never interleave.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use crate::core::config::ScanConfig;
use crate::git::checker::RepoReport;

pub struct Printer {
    show_status: bool,
    show_ahead: bool,
    show_behind: bool,
    show_all: bool,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Printer {
    pub fn new(config: &ScanConfig, sink: Box<dyn Write + Send>) -> Self {
        Self {
            show_status: config.show_status,
            show_ahead: config.show_ahead,
            show_behind: config.show_behind,
            show_all: config.show_all,
            sink: Mutex::new(sink),
        }
    }

    /// Printer over standard output, the binary's configuration
    pub fn stdout(config: &ScanConfig) -> Self {
        Self::new(config, Box::new(io::stdout()))
    }

    fn lock_sink(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.sink
            .lock()
            .expect("Failed to acquire lock on output sink - mutex may be poisoned")
    }

    /// Display policy: flags combine by OR, and with none set only dirty
    /// repositories are shown.
    fn should_publish(&self, report: &RepoReport) -> bool {
        self.show_all
            || report.dirty
            || (self.show_ahead && report.ahead)
            || (self.show_behind && report.behind)
    }

    /// Emits one repository's output block: the path line and, when status
    /// display is on, its captured porcelain text. One lock acquisition per
    /// block.
    pub fn publish(&self, report: &RepoReport) {
        if !self.should_publish(report) {
            return;
        }

        let mut out = self.lock_sink();
        let _ = writeln!(out, "{}", report.path.display());
        if self.show_status {
            let _ = writeln!(out, "{}", report.status_text);
        }
        let _ = out.flush();
    }

    /// Prints a fetch/pull transcript immediately, under the same lock as
    /// `publish`. Side-effecting steps stay observable even when the
    /// repository is later filtered out of the summary.
    pub fn emit_transcript(&self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }

        let mut out = self.lock_sink();
        let _ = writeln!(out, "{trimmed}");
        let _ = out.flush();
    }
}
