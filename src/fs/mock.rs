// src/fs/mock.rs

use super::FileSystem;
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(Vec<u8>),
    Dir(Vec<String>), // List of child names
}

impl MockEntry {
    fn is_file(&self) -> bool {
        matches!(self, MockEntry::File(_))
    }
}

/// In-memory filesystem for tests.
///
/// Clones share the same storage, so a test can keep one handle to inspect
/// what the code under test did with the other.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let mut files = HashMap::new();
        // Ensure root exists
        files.insert(PathBuf::from("."), MockEntry::Dir(Vec::new()));

        Self {
            files: Arc::new(Mutex::new(files)),
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref().to_path_buf();
        let mut files = self.lock();
        files.insert(path.clone(), MockEntry::File(content.into()));
        Self::link_to_parent(&mut files, &path);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut files = self.lock();
        Self::ensure_dir_entry(&mut files, path.as_ref());
    }

    /// Contents of a file, if present.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.lock().get(path.as_ref()) {
            Some(MockEntry::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    /// Sorted file names directly inside `dir`.
    pub fn list(&self, dir: impl AsRef<Path>) -> Vec<String> {
        let files = self.lock();
        let mut names = match files.get(dir.as_ref()) {
            Some(MockEntry::Dir(children)) => children.clone(),
            _ => Vec::new(),
        };
        names.sort();
        names
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, MockEntry>> {
        // A panic while holding the lock only happens inside a failing test.
        self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn parent_of(path: &Path) -> Option<&Path> {
        let parent = path.parent()?;
        if parent.as_os_str().is_empty() {
            Some(Path::new("."))
        } else {
            Some(parent)
        }
    }

    fn link_to_parent(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let Some(parent) = Self::parent_of(path) else {
            return;
        };
        if parent == path {
            return;
        }
        Self::ensure_dir_entry(files, parent);
        if let Some(MockEntry::Dir(children)) = files.get_mut(parent) {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if !children.iter().any(|c| c == name) {
                    children.push(name.to_string());
                }
            }
        }
    }

    fn unlink_from_parent(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let Some(parent) = Self::parent_of(path) else {
            return;
        };
        if let (Some(MockEntry::Dir(children)), Some(name)) =
            (files.get_mut(parent), path.file_name().and_then(|n| n.to_str()))
        {
            children.retain(|c| c != name);
        }
    }

    fn ensure_dir_entry(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        if !files.contains_key(path) {
            files.insert(path.to_path_buf(), MockEntry::Dir(Vec::new()));
            Self::link_to_parent(files, path);
        }
    }
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let files = self.lock();
        match files.get(path) {
            Some(MockEntry::File(content)) => Ok(content.clone()),
            Some(MockEntry::Dir(_)) => Err(anyhow!("Is a directory: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        matches!(self.lock().get(path), Some(MockEntry::File(_)))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut files = self.lock();
        match files.get(path).map(MockEntry::is_file) {
            Some(true) => Err(anyhow!("File exists: {:?}", path)),
            Some(false) => Ok(()),
            None => {
                Self::ensure_dir_entry(&mut files, path);
                Ok(())
            }
        }
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let files = self.lock();
        match files.get(path) {
            Some(MockEntry::Dir(children)) => {
                Ok(children.iter().map(|name| path.join(name)).collect())
            }
            _ => Err(anyhow!("Not a directory or not found: {:?}", path)),
        }
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<()> {
        let content = match self.lock().get(from) {
            Some(MockEntry::File(content)) => content.clone(),
            Some(MockEntry::Dir(_)) => return Err(anyhow!("Is a directory: {:?}", from)),
            None => return Err(anyhow!("File not found: {:?}", from)),
        };
        self.add_file(to, content);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        let mut files = self.lock();
        match files.get(path).map(MockEntry::is_file) {
            Some(true) => {
                files.remove(path);
                Self::unlink_from_parent(&mut files, path);
                Ok(())
            }
            Some(false) => Err(anyhow!("Is a directory: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        if from == to {
            return if self.is_file(from) {
                Ok(())
            } else {
                Err(anyhow!("File not found: {:?}", from))
            };
        }
        self.copy(from, to)?;
        self.remove_file(from)
    }
}
