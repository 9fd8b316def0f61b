// src/latex/build.rs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::LatexSection;
use crate::exec::{CommandRunner, quote_arg};
use crate::fs::{FileSystem, WorkDir};
use crate::latex::{BuildArtifact, LatexOptions, prune_stale};
use crate::types::{ExitCode, TargetFile};

/// What a LaTeX build did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Exit code of the build: the first pass's code when it failed,
    /// otherwise `0` (or the failing secondary code in strict mode).
    pub exit_code: ExitCode,
    /// Final PDF location, if the build got that far.
    pub artifact: Option<PathBuf>,
    /// Older PDFs removed from the target directory.
    pub pruned: Vec<PathBuf>,
}

impl BuildReport {
    fn failed(exit_code: ExitCode) -> Self {
        Self {
            exit_code,
            artifact: None,
            pruned: Vec::new(),
        }
    }
}

/// One LaTeX build of a single target file.
///
/// 1. create the scratch build dir
/// 2. first pass in batch mode (the only step whose failure always aborts)
/// 3. tier extras: bibtex + two passes (release) or one pass (beta)
/// 4. prune older `<stem>-*.pdf` files, move the new PDF next to the
///    source under its versioned name, open it
pub struct LatexBuild<'a> {
    fs: &'a dyn FileSystem,
    runner: &'a mut dyn CommandRunner,
    config: &'a LatexSection,
    opener: String,
}

impl<'a> LatexBuild<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        runner: &'a mut dyn CommandRunner,
        config: &'a LatexSection,
        opener: impl Into<String>,
    ) -> Self {
        Self {
            fs,
            runner,
            config,
            opener: opener.into(),
        }
    }

    pub fn run(
        &mut self,
        target: &TargetFile,
        options: &LatexOptions,
        today: NaiveDate,
    ) -> Result<BuildReport> {
        let build_dir = self.config.build_dir();
        self.fs.create_dir_all(&build_dir)?;
        debug!(build_dir = %build_dir.display(), ?options, "starting latex build");

        let mut workdir = WorkDir::new(target.dir());
        let stem = target.stem();

        let first = typeset_command(self.config, options, &build_dir, stem, true);
        let code = self.runner.run(&first, workdir.path())?;
        if code != 0 {
            warn!(exit_code = code, "first typeset pass failed; aborting build");
            return Ok(BuildReport::failed(code));
        }

        if options.pythontex {
            let cmd = format!(
                "{} {}",
                self.config.pythontex,
                quote_arg(&build_dir.join(stem).to_string_lossy())
            );
            let code = self.runner.run(&cmd, workdir.path())?;
            if let Some(code) = self.secondary_failure("pythontex", code) {
                return Ok(BuildReport::failed(code));
            }
        }

        if options.tier.runs_bibliography() {
            let scope = workdir.enter(&build_dir);
            self.copy_bibliographies(target.dir(), scope.path())?;
            let cmd = format!("{} {}", self.config.bibtex, quote_arg(stem));
            let code = self.runner.run(&cmd, scope.path())?;
            if let Some(code) = self.secondary_failure("bibtex", code) {
                return Ok(BuildReport::failed(code));
            }
        }

        let pass = typeset_command(self.config, options, &build_dir, stem, false);
        for n in 0..options.tier.extra_passes() {
            let code = self.runner.run(&pass, workdir.path())?;
            if let Some(code) = self.secondary_failure(&format!("typeset pass {}", n + 2), code) {
                return Ok(BuildReport::failed(code));
            }
        }

        let output = build_dir.join(format!("{stem}.pdf"));
        if !self.fs.is_file(&output) {
            bail!(
                "engine reported success but produced no {:?}",
                output
            );
        }

        let artifact = BuildArtifact::new(stem, today, options.tier);
        let pruned = prune_stale(self.fs, target.dir(), &artifact)?;
        let destination = target.dir().join(artifact.file_name());
        self.fs
            .rename(&output, &destination)
            .with_context(|| format!("moving build output to {:?}", destination))?;
        info!(artifact = %destination.display(), tier = %options.tier, "latex build finished");

        let open = format!("{} {}", self.opener, quote_arg(&artifact.file_name()));
        let code = self.runner.run(&open, workdir.path())?;
        if code != 0 {
            warn!(exit_code = code, "opening the pdf failed");
        }

        Ok(BuildReport {
            exit_code: 0,
            artifact: Some(destination),
            pruned,
        })
    }

    /// Copy every `*.bib` file of `source_dir` into `build_dir`.
    fn copy_bibliographies(&self, source_dir: &Path, build_dir: &Path) -> Result<()> {
        for path in self.fs.read_dir(source_dir)? {
            let is_bib = path.extension().is_some_and(|ext| ext == "bib");
            if !is_bib || !self.fs.is_file(&path) {
                continue;
            }
            let Some(name) = path.file_name() else {
                continue;
            };
            let dest = build_dir.join(name);
            debug!(from = %path.display(), to = %dest.display(), "copying bibliography");
            self.fs.copy(&path, &dest)?;
        }
        Ok(())
    }

    /// Log a failed secondary step; in strict mode also return its code.
    fn secondary_failure(&self, step: &str, code: ExitCode) -> Option<ExitCode> {
        if code == 0 {
            return None;
        }
        if self.config.strict_secondary_passes {
            warn!(step, exit_code = code, "secondary step failed; strict mode aborts the build");
            Some(code)
        } else {
            warn!(step, exit_code = code, "secondary step failed; continuing");
            None
        }
    }
}

/// Engine invocation for one pass.
///
/// Only the first pass runs with `-interaction=nonstopmode`.
pub fn typeset_command(
    config: &LatexSection,
    options: &LatexOptions,
    build_dir: &Path,
    stem: &str,
    first_pass: bool,
) -> String {
    let mut parts = vec![options.engine.command(config).to_string()];
    if first_pass {
        parts.push("-interaction=nonstopmode".to_string());
    }
    parts.push(format!(
        "-output-directory={}",
        quote_arg(&build_dir.to_string_lossy())
    ));
    if options.shell_escape {
        parts.push("--shell-escape".to_string());
    }
    parts.push(quote_arg(stem));
    parts.join(" ")
}
