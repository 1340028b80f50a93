//! Test fixtures and builders

use anyhow::Result;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::git::{attach_upstream, create_test_commit, rewind_commits, setup_git_repo};

/// A writable sink that tests can read back, shareable across the
/// scan's concurrent workers.
#[derive(Clone, Default)]
pub struct SharedSink(Arc<Mutex<Vec<u8>>>);

impl SharedSink {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn boxed(&self) -> Box<dyn Write + Send> {
        Box::new(self.clone())
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Creates a repository with one commit and a clean working tree
pub fn clean_repo(workspace: &Path, name: &str) -> Result<PathBuf> {
    let repo = workspace.join(name);
    std::fs::create_dir_all(&repo)?;
    setup_git_repo(&repo)?;
    create_test_commit(&repo, "README.md", "hello\n", "initial commit")?;
    Ok(repo)
}

/// Creates a repository whose tracked file has uncommitted modifications
pub fn dirty_repo(workspace: &Path, name: &str) -> Result<PathBuf> {
    let repo = clean_repo(workspace, name)?;
    std::fs::write(repo.join("README.md"), "hello\nmodified\n")?;
    Ok(repo)
}

/// Creates a clean repository that is one commit ahead of its upstream
pub fn ahead_repo(workspace: &Path, name: &str, remotes: &Path) -> Result<PathBuf> {
    let repo = clean_repo(workspace, name)?;
    attach_upstream(&repo, &remotes.join(format!("{name}.git")))?;
    create_test_commit(&repo, "ahead.txt", "unpushed\n", "unpushed commit")?;
    Ok(repo)
}

/// Creates a clean repository that is one commit behind its upstream
pub fn behind_repo(workspace: &Path, name: &str, remotes: &Path) -> Result<PathBuf> {
    let repo = clean_repo(workspace, name)?;
    create_test_commit(&repo, "second.txt", "second\n", "second commit")?;
    attach_upstream(&repo, &remotes.join(format!("{name}.git")))?;
    rewind_commits(&repo, 1)?;
    Ok(repo)
}

/// Creates a repository that has diverged from its upstream, so a
/// fast-forward-only pull cannot succeed
pub fn diverged_repo(workspace: &Path, name: &str, remotes: &Path) -> Result<PathBuf> {
    let repo = behind_repo(workspace, name, remotes)?;
    create_test_commit(&repo, "local.txt", "local\n", "local divergence")?;
    Ok(repo)
}
