// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

pub mod mock;
pub mod workdir;

pub use workdir::{WorkDir, WorkDirGuard};

/// Abstract filesystem interface.
///
/// Only the operations the launcher and the LaTeX build need; tests swap in
/// [`mock::MockFileSystem`].
pub trait FileSystem: Debug {
    fn read(&self, path: &Path) -> Result<Vec<u8>>;
    fn is_file(&self, path: &Path) -> bool;
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Return a list of entries in a directory.
    /// Returns full paths.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Copy `from` to `to`, overwriting `to` if it exists.
    fn copy(&self, from: &Path, to: &Path) -> Result<()>;
    fn remove_file(&self, path: &Path) -> Result<()>;

    /// Move `from` to `to`, replacing `to` if it exists.
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).with_context(|| format!("reading file {:?}", path))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).with_context(|| format!("creating dir {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).with_context(|| format!("reading dir {:?}", path))? {
            let entry = entry?;
            entries.push(entry.path());
        }
        Ok(entries)
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<()> {
        fs::copy(from, to).with_context(|| format!("copying {:?} to {:?}", from, to))?;
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).with_context(|| format!("removing file {:?}", path))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            // The build dir usually lives on a different filesystem (tmpfs).
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
                debug!(from = %from.display(), to = %to.display(), "rename crosses devices; copying instead");
                self.copy(from, to)?;
                self.remove_file(from)
            }
            Err(e) => Err(e).with_context(|| format!("moving {:?} to {:?}", from, to)),
        }
    }
}
