use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Exit code of an external command (or of the whole run).
///
/// Zero means success. A child killed by a signal reports `-1`.
pub type ExitCode = i32;

/// The file `dofile` was asked to run.
///
/// Derived once at startup from the CLI path; every other component only
/// reads from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    path: PathBuf,
    dir: PathBuf,
    file_name: String,
    stem: String,
    extension: String,
}

impl TargetFile {
    /// Resolve `path` against the current directory and split it into parts.
    pub fn resolve(path: &Path) -> anyhow::Result<Self> {
        let absolute = std::path::absolute(path)
            .with_context(|| format!("resolving absolute path of {:?}", path))?;
        Ok(Self::from_path(absolute))
    }

    /// Split `path` into parts without touching the current directory.
    ///
    /// Used directly by tests that work against a mock filesystem.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        Self {
            path,
            dir,
            file_name,
            stem,
            extension,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parent directory; `.` when the path had none.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name like `foo.tex`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Name-stem like `foo` from `foo.tex`.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Lower-cased extension without the dot (`tex`), empty if none.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

/// Final result of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Something was run; carries the exit code to report.
    Completed(ExitCode),
    /// No directive and no handler for this extension. Nothing was executed.
    NoAction,
}

impl RunOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> ExitCode {
        match self {
            RunOutcome::Completed(code) => code,
            RunOutcome::NoAction => 0,
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Completed(0) => write!(f, "completed"),
            RunOutcome::Completed(code) => write!(f, "failed with exit code {code}"),
            RunOutcome::NoAction => write!(f, "no defined action"),
        }
    }
}
