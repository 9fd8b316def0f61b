// src/latex/artifact.rs

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use crate::fs::FileSystem;
use crate::latex::Tier;

/// `strftime` pattern of the artifact timestamp, e.g. `20261014Wed`.
///
/// chrono always renders `%a` in English, so names do not depend on the
/// user's locale.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%a";

pub fn format_timestamp(date: NaiveDate) -> String {
    date.format(TIMESTAMP_FORMAT).to_string()
}

/// Versioned output of one LaTeX build: `<stem>-<timestamp>-<tier>.pdf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifact {
    stem: String,
    timestamp: String,
    tier: Tier,
}

impl BuildArtifact {
    pub fn new(stem: impl Into<String>, date: NaiveDate, tier: Tier) -> Self {
        Self {
            stem: stem.into(),
            timestamp: format_timestamp(date),
            tier,
        }
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Artifact name without extension.
    pub fn artifact_stem(&self) -> String {
        format!("{}-{}-{}", self.stem, self.timestamp, self.tier)
    }

    pub fn file_name(&self) -> String {
        format!("{}.pdf", self.artifact_stem())
    }

    /// True if `candidate` is an older output for the same name-stem.
    ///
    /// Matches `*.pdf` files whose stem starts with `<stem>-`, except the
    /// file this artifact is about to become.
    pub fn supersedes(&self, candidate: &Path) -> bool {
        let is_pdf = candidate.extension().is_some_and(|ext| ext == "pdf");
        if !is_pdf {
            return false;
        }
        let Some(candidate_stem) = candidate.file_stem().and_then(|s| s.to_str()) else {
            return false;
        };
        let prefix = format!("{}-", self.stem);
        candidate_stem.starts_with(&prefix) && candidate_stem != self.artifact_stem()
    }
}

/// Delete every PDF in `dir` superseded by `artifact`.
///
/// Returns the removed paths in sorted order.
pub fn prune_stale(
    fs: &dyn FileSystem,
    dir: &Path,
    artifact: &BuildArtifact,
) -> Result<Vec<PathBuf>> {
    let mut stale: Vec<PathBuf> = fs
        .read_dir(dir)?
        .into_iter()
        .filter(|path| artifact.supersedes(path) && fs.is_file(path))
        .collect();
    stale.sort();

    for path in &stale {
        info!(path = %path.display(), "removing superseded pdf");
        fs.remove_file(path)?;
    }

    Ok(stale)
}
