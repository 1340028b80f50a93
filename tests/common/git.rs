//! Git testing utilities

use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// Checks whether the git binary is available on this machine
pub fn is_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Sets up a git repository with user config
pub fn setup_git_repo(path: &Path) -> Result<()> {
    let init_result = Command::new("git")
        .args(["init", "-q"])
        .current_dir(path)
        .output()?;

    if !init_result.status.success() {
        anyhow::bail!("Git not available - skipping test");
    }

    // Configure git user
    Command::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(path)
        .output()?;

    Command::new("git")
        .args(["config", "user.email", "test@example.com"])
        .current_dir(path)
        .output()?;

    // Disable commit signing for tests
    Command::new("git")
        .args(["config", "commit.gpgsign", "false"])
        .current_dir(path)
        .output()?;

    Ok(())
}

/// Creates a test commit in the repository
pub fn create_test_commit(path: &Path, file_name: &str, content: &str, message: &str) -> Result<()> {
    std::fs::write(path.join(file_name), content)?;

    Command::new("git")
        .args(["add", file_name])
        .current_dir(path)
        .output()?;

    let commit_result = Command::new("git")
        .args(["commit", "-q", "-m", message])
        .current_dir(path)
        .output()?;

    if !commit_result.status.success() {
        anyhow::bail!(
            "Failed to commit: {}",
            String::from_utf8_lossy(&commit_result.stderr)
        );
    }

    Ok(())
}

/// Creates a local bare repository at `bare`, adds it as `origin` of `repo`
/// and pushes the current branch with upstream tracking.
pub fn attach_upstream(repo: &Path, bare: &Path) -> Result<()> {
    std::fs::create_dir_all(bare)?;

    let init_result = Command::new("git")
        .args(["init", "-q", "--bare"])
        .current_dir(bare)
        .output()?;
    if !init_result.status.success() {
        anyhow::bail!(
            "Failed to init bare remote: {}",
            String::from_utf8_lossy(&init_result.stderr)
        );
    }

    Command::new("git")
        .args(["remote", "add", "origin"])
        .arg(bare)
        .current_dir(repo)
        .output()?;

    let push_result = Command::new("git")
        .args(["push", "-q", "-u", "origin", "HEAD"])
        .current_dir(repo)
        .output()?;
    if !push_result.status.success() {
        anyhow::bail!(
            "Failed to push to bare remote: {}",
            String::from_utf8_lossy(&push_result.stderr)
        );
    }

    Ok(())
}

/// Moves the repository's HEAD back by `count` commits, leaving it behind
/// its already-pushed upstream.
pub fn rewind_commits(repo: &Path, count: usize) -> Result<()> {
    let reset_result = Command::new("git")
        .args(["reset", "-q", "--hard", &format!("HEAD~{count}")])
        .current_dir(repo)
        .output()?;
    if !reset_result.status.success() {
        anyhow::bail!(
            "Failed to reset: {}",
            String::from_utf8_lossy(&reset_result.stderr)
        );
    }
    Ok(())
}
