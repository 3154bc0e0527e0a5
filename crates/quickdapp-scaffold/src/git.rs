//! Git operations for template scaffolding

use crate::error::{Error, Result};
use crate::process::{CommandRunner, RunOptions};
use camino::Utf8Path;
use tracing::{debug, info};

/// Check that git is present in PATH
pub fn ensure_git_available() -> Result<()> {
    which::which("git").map(|_| ()).map_err(|_| Error::GitNotFound)
}

/// Clone the template repository into `destination`
pub async fn clone_template(
    runner: &dyn CommandRunner,
    url: &str,
    destination: &Utf8Path,
) -> Result<()> {
    info!("Cloning template: {} -> {}", url, destination);
    runner
        .run(
            "git",
            &["clone", url, destination.as_str()],
            &RunOptions::silent(),
        )
        .await
}

/// Replace the cloned template's history with a fresh repository
///
/// Removes `<path>/.git` when present and runs `git init`. A missing
/// `.git` directory is not an error.
pub async fn reinitialize_repository(runner: &dyn CommandRunner, path: &Utf8Path) -> Result<()> {
    let git_dir = path.join(".git");
    if git_dir.exists() {
        debug!("Removing template git metadata at {}", git_dir);
        tokio::fs::remove_dir_all(&git_dir).await?;
    }

    runner
        .run("git", &["init"], &RunOptions::silent_in(path))
        .await?;

    info!("Fresh git repository initialized at {}", path);
    Ok(())
}
