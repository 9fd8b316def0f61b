// src/fs/workdir.rs

//! Scoped working directory.
//!
//! `dofile` never calls `chdir`. Commands are started with an explicit
//! working directory taken from a [`WorkDir`], and steps that must run
//! somewhere else (bibtex inside the LaTeX build dir) enter a
//! [`WorkDirGuard`]. Dropping the guard restores the previous directory,
//! whichever way the scope is left.

use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkDir {
    current: PathBuf,
}

impl WorkDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            current: dir.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.current
    }

    /// Switch to `dir` until the returned guard is dropped.
    pub fn enter(&mut self, dir: impl Into<PathBuf>) -> WorkDirGuard<'_> {
        let dir = dir.into();
        debug!(from = %self.current.display(), to = %dir.display(), "entering work dir");
        let previous = std::mem::replace(&mut self.current, dir);
        WorkDirGuard {
            workdir: self,
            previous: Some(previous),
        }
    }
}

/// Restores the enclosing [`WorkDir`] on drop.
#[derive(Debug)]
pub struct WorkDirGuard<'a> {
    workdir: &'a mut WorkDir,
    previous: Option<PathBuf>,
}

impl Deref for WorkDirGuard<'_> {
    type Target = WorkDir;

    fn deref(&self) -> &WorkDir {
        self.workdir
    }
}

impl DerefMut for WorkDirGuard<'_> {
    fn deref_mut(&mut self) -> &mut WorkDir {
        self.workdir
    }
}

impl Drop for WorkDirGuard<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            debug!(to = %previous.display(), "restoring work dir");
            self.workdir.current = previous;
        }
    }
}
