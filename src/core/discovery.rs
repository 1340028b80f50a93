//! Repository discovery
//!
//! Walks a directory tree in parallel looking for `.git` markers and streams
//! the parent directory of each marker over a bounded channel. The channel
//! bound means a stalled consumer backpressures the walk instead of letting
//! it buffer paths without limit.

use dashmap::DashMap;
use ignore::{WalkBuilder, WalkState};
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc::{self, Receiver};
use tokio::task::JoinHandle;

use super::config::{DISCOVERY_CHANNEL_CAPACITY, MAX_WALKER_THREADS, SKIP_DIRECTORIES};

/// One walker-yielded item: a repository working directory, or a per-item
/// error the scheduler logs and skips.
#[derive(Debug)]
pub enum DiscoveryItem {
    Repo(PathBuf),
    Error(ignore::Error),
}

/// Check if a .git file (for submodules/worktrees) contains a gitdir reference
/// Only reads the first 5 lines for efficiency
fn is_git_file(path: &Path) -> bool {
    match fs::File::open(path) {
        Ok(file) => {
            let reader = BufReader::new(file);
            reader
                .lines()
                .take(5)
                .filter_map(Result::ok)
                .any(|line| line.trim_start().starts_with("gitdir:"))
        }
        Err(_) => false,
    }
}

/// Spawns the parallel directory walker over `root` and returns its join
/// handle together with the receiving end of the discovery stream.
///
/// A `.git` marker is either a directory or a `gitdir:` file (submodules and
/// worktrees). The repository path is the parent of the marker. Symlinks are
/// followed, common build/dependency directories are skipped, and each
/// repository path is yielded at most once.
pub fn spawn_walker(
    root: &Path,
    max_depth: Option<usize>,
) -> (JoinHandle<()>, Receiver<DiscoveryItem>) {
    let (tx, rx) = mpsc::channel(DISCOVERY_CHANNEL_CAPACITY);
    let root = root.to_path_buf();

    let handle = tokio::task::spawn_blocking(move || {
        let seen: Arc<DashMap<PathBuf, ()>> = Arc::new(DashMap::new());

        let walker = WalkBuilder::new(&root)
            .follow_links(true)
            .max_depth(max_depth)
            .threads(num_cpus::get().min(MAX_WALKER_THREADS))
            .hidden(false) // Enable hidden entries so .git is visible
            .build_parallel();

        walker.run(|| {
            let tx = tx.clone();
            let seen = Arc::clone(&seen);
            Box::new(move |result| {
                let entry = match result {
                    Ok(entry) => entry,
                    Err(err) => {
                        // A closed receiver means the scan was torn down.
                        return match tx.blocking_send(DiscoveryItem::Error(err)) {
                            Ok(()) => WalkState::Continue,
                            Err(_) => WalkState::Quit,
                        };
                    }
                };

                let file_name = entry.file_name().to_str().unwrap_or("");

                if file_name == ".git" {
                    let path = entry.path();
                    let is_repo_marker = if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                        true
                    } else {
                        // Submodules and worktrees expose a .git file
                        is_git_file(path)
                    };

                    if is_repo_marker {
                        if let Some(repo_path) = path.parent() {
                            let repo_path = repo_path.to_path_buf();
                            if seen.insert(repo_path.clone(), ()).is_none()
                                && tx.blocking_send(DiscoveryItem::Repo(repo_path)).is_err()
                            {
                                return WalkState::Quit;
                            }
                        }
                    }
                    // Don't descend into .git
                    return WalkState::Skip;
                }

                // Skip common build/dependency directories
                if SKIP_DIRECTORIES.contains(&file_name) {
                    return WalkState::Skip;
                }

                // Skip hidden entries below the root; .git is handled above
                if entry.depth() > 0 && file_name.starts_with('.') {
                    return WalkState::Skip;
                }

                WalkState::Continue
            })
        });
    });

    (handle, rx)
}
