//! Disposable working directory
//!
//! Wraps `tempfile::TempDir`: the directory and everything downloaded or
//! extracted into it is removed when the `Workspace` is dropped, which
//! happens on success, on error and after an interrupt unwinds the pipeline.
//!
//! A Ctrl+C handler cannot wait for the pipeline to unwind while a network
//! read is blocked, so the live workspace path is also published through
//! [`ActiveWorkspace`] for the handler to remove before exiting.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tempfile::TempDir;

use crate::error::FaltexResult;

const PREFIX: &str = ".faltex-";

#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a workspace in the system temp dir, or under `parent` if given
    pub fn create(parent: Option<&Path>) -> FaltexResult<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(PREFIX);
        let dir = match parent {
            Some(parent) => {
                std::fs::create_dir_all(parent)?;
                builder.tempdir_in(parent)?
            }
            None => builder.tempdir()?,
        };
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Where the archive for `version` is downloaded
    pub fn archive_path(&self, version: &str) -> PathBuf {
        self.path().join(format!("fontawesome-{}.zip", version))
    }

    /// Where the archive is extracted
    pub fn extract_dir(&self) -> PathBuf {
        self.path().join("extracted")
    }

    /// Remove the directory now and report failures instead of ignoring them
    pub fn close(self) -> FaltexResult<()> {
        self.dir.close()?;
        Ok(())
    }
}

/// Shared slot holding the path of the workspace in use, if any
#[derive(Debug, Clone, Default)]
pub struct ActiveWorkspace {
    slot: Arc<Mutex<Option<PathBuf>>>,
}

impl ActiveWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish `workspace` until the returned guard is dropped
    pub fn register(&self, workspace: &Workspace) -> ActiveWorkspaceGuard<'_> {
        *self.lock() = Some(workspace.path().to_path_buf());
        ActiveWorkspaceGuard { active: self }
    }

    pub fn current(&self) -> Option<PathBuf> {
        self.lock().clone()
    }

    /// Delete the published workspace, if any. Returns whether one was removed.
    ///
    /// The slot stays locked while deleting, so the pipeline cannot register a
    /// new workspace halfway through.
    pub fn remove_now(&self) -> bool {
        let mut slot = self.lock();
        match slot.take() {
            Some(path) => std::fs::remove_dir_all(&path).is_ok() || !path.exists(),
            None => false,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<PathBuf>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Clears the [`ActiveWorkspace`] slot when dropped
#[derive(Debug)]
pub struct ActiveWorkspaceGuard<'a> {
    active: &'a ActiveWorkspace,
}

impl Drop for ActiveWorkspaceGuard<'_> {
    fn drop(&mut self) {
        self.active.lock().take();
    }
}
