// src/exec/pipeline.rs

use std::path::Path;

use anyhow::Result;
use tracing::{debug, warn};

use crate::directive::{PipelineSpec, substitute};
use crate::exec::CommandRunner;
use crate::types::{ExitCode, TargetFile};

/// Run `commands` in order inside `cwd`, stopping at the first nonzero
/// exit code.
///
/// Returns that code, or `0` when every command succeeded. Commands after
/// a failing one are never started.
pub fn run_commands<S: AsRef<str>>(
    runner: &mut dyn CommandRunner,
    commands: &[S],
    cwd: &Path,
) -> Result<ExitCode> {
    let total = commands.len();
    for (idx, command) in commands.iter().enumerate() {
        let command = command.as_ref();
        let stage = idx + 1;
        debug!(stage, total, cmd = %command, "running stage");

        let code = runner.run(command, cwd)?;
        if code != 0 {
            let skipped = total - stage;
            warn!(stage, exit_code = code, skipped, "stage failed; stopping pipeline");
            return Ok(code);
        }
    }
    Ok(0)
}

/// Run an explicit directive against `target`.
///
/// Each stage has its `%f` / `%n` placeholders replaced with the target's
/// file name and name-stem right before it runs.
pub fn run_pipeline(
    runner: &mut dyn CommandRunner,
    spec: &PipelineSpec,
    target: &TargetFile,
    cwd: &Path,
) -> Result<ExitCode> {
    let resolved = resolve_stages(spec, target);
    run_commands(runner, &resolved, cwd)
}

/// Placeholder-substituted stages of `spec`.
pub fn resolve_stages(spec: &PipelineSpec, target: &TargetFile) -> Vec<String> {
    spec.stages()
        .iter()
        .map(|stage| substitute(stage, target.file_name(), target.stem()))
        .collect()
}
