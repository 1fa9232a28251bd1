//! Git operations for the version bump: stage the manifest and commit.
//!
//! Shells out to the system `git` binary, inheriting the user's git config and
//! credentials.

use std::path::{Path, PathBuf};
use std::process::Command;

use semver::Version;
use tracing::{debug, warn};

use crate::error::VcsError;

/// Version-control operations used by the bump.
///
/// This abstraction allows mocking git in tests.
#[cfg_attr(test, mockall::automock)]
pub trait VcsExecutor {
    /// Stage a single file.
    fn stage(&self, path: &Path) -> Result<(), VcsError>;

    /// Create a commit from the staged changes.
    fn commit(&self, message: &str) -> Result<(), VcsError>;
}

/// Executor that runs the real `git` CLI from a fixed directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Run git commands from `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { workdir: dir.into() }
    }

    /// Run git commands from the directory holding `file`, so the file is
    /// staged and committed in its own repository.
    pub fn for_file(file: &Path) -> Self {
        match file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Self::in_dir(parent),
            _ => Self::in_dir("."),
        }
    }

    /// `path` as git should see it from the working directory.
    fn relative_to_workdir<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.workdir).unwrap_or(path)
    }

    fn run_git(&self, args: &[&str], operation: &str) -> Result<(), VcsError> {
        if which::which("git").is_err() {
            return Err(VcsError::NotInstalled);
        }

        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(&self.workdir);

        let output = cmd.output().map_err(|source| VcsError::SpawnFailed {
            operation: operation.to_string(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            // `git commit` with nothing staged reports on stdout
            let detail = if stderr.trim().is_empty() { stdout } else { stderr };
            return Err(VcsError::CommandFailed {
                operation: operation.to_string(),
                stderr: detail.trim().to_string(),
            });
        }

        Ok(())
    }
}

impl VcsExecutor for GitCli {
    fn stage(&self, path: &Path) -> Result<(), VcsError> {
        let path = self.relative_to_workdir(path).to_string_lossy().into_owned();
        self.run_git(&["add", "--", path.as_str()], "add")
    }

    fn commit(&self, message: &str) -> Result<(), VcsError> {
        self.run_git(&["commit", "-m", message], "commit")
    }
}

/// Commit message for a version bump.
pub fn commit_message(version: &Version) -> String {
    format!("Bump version to {}", version)
}

/// Stage `manifest` and commit it as a version bump.
///
/// Failures are logged and swallowed: the bump itself already succeeded.
/// Returns whether the commit was created.
pub fn record_bump<E: VcsExecutor + ?Sized>(executor: &E, manifest: &Path, version: &Version) -> bool {
    if let Err(e) = executor.stage(manifest) {
        warn!("Could not stage {}: {}", manifest.display(), e);
    }

    let message = commit_message(version);
    match executor.commit(&message) {
        Ok(()) => {
            debug!("Created commit: {}", message);
            true
        }
        Err(e) => {
            warn!("Could not create commit '{}': {}", message, e);
            false
        }
    }
}
