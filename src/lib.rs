// src/lib.rs

pub mod cli;
pub mod config;
pub mod directive;
pub mod dispatch;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod latex;
pub mod logging;
pub mod report;
pub mod types;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, load_for_cli};
use crate::directive::read_first_line;
use crate::dispatch::{Plan, resolve_plan};
use crate::errors::{DofileError, Result};
use crate::exec::{CommandRunner, ShellRunner, run_commands, run_pipeline};
use crate::fs::{FileSystem, RealFileSystem};
use crate::latex::LatexBuild;
use crate::types::{RunOutcome, TargetFile};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - target resolution and first-line reading
/// - plan resolution (directive or filetype handler)
/// - execution through the shell runner
pub fn run(args: CliArgs) -> Result<RunOutcome> {
    let file = args.file.as_deref().ok_or(DofileError::Usage)?;
    let config = load_for_cli(args.config.as_deref())?;

    let target = TargetFile::resolve(file)?;
    let fs = RealFileSystem;
    let first_line = read_first_line(&fs, target.path());
    debug!(path = %target.path().display(), first_line = %first_line, "read target");

    let plan = resolve_plan(&target, &first_line, &config)?;
    info!(?plan, "resolved plan");

    if args.dry_run {
        print_dry_run(&plan, &target, &config);
        return Ok(RunOutcome::Completed(0));
    }

    let mut runner = ShellRunner::new();
    let outcome = execute(&plan, &target, &config, &fs, &mut runner, Local::now().date_naive())?;
    report::print_outcome(outcome);
    Ok(outcome)
}

/// Carry out a resolved [`Plan`].
///
/// Every command runs with the target's directory as its working
/// directory. `today` dates the LaTeX artifact.
pub fn execute(
    plan: &Plan,
    target: &TargetFile,
    config: &ConfigFile,
    fs: &dyn FileSystem,
    runner: &mut dyn CommandRunner,
    today: NaiveDate,
) -> Result<RunOutcome> {
    let cwd = target.dir();
    let code = match plan {
        Plan::Pipeline(spec) => run_pipeline(runner, spec, target, cwd)?,
        Plan::Commands { commands, .. } => run_commands(runner, commands, cwd)?,
        Plan::Latex(options) => {
            let opener = config.tools.opener_command();
            let mut build = LatexBuild::new(fs, runner, &config.latex, opener);
            build.run(target, options, today)?.exit_code
        }
        Plan::NoAction => return Ok(RunOutcome::NoAction),
    };
    Ok(RunOutcome::Completed(code))
}

/// Human-readable description of what [`execute`] would do.
pub fn describe_plan(plan: &Plan, target: &TargetFile, config: &ConfigFile) -> Vec<String> {
    match plan {
        Plan::Pipeline(spec) => {
            let mut lines = vec![format!("directive pipeline ({} stages):", spec.len())];
            lines.extend(
                exec::pipeline::resolve_stages(spec, target)
                    .into_iter()
                    .map(|cmd| format!("  $ {cmd}")),
            );
            lines
        }
        Plan::Commands { handler, commands } => {
            let mut lines = vec![format!("{handler} handler:")];
            lines.extend(commands.iter().map(|cmd| format!("  $ {cmd}")));
            lines
        }
        Plan::Latex(options) => {
            let build_dir = config.latex.build_dir();
            vec![
                "latex build:".to_string(),
                format!("  engine: {}", options.engine.command(&config.latex)),
                format!("  tier: {}", options.tier),
                format!("  shell escape: {}", options.shell_escape),
                format!("  pythontex: {}", options.pythontex),
                format!("  build dir: {}", build_dir.display()),
                format!(
                    "  $ {}",
                    latex::build::typeset_command(&config.latex, options, &build_dir, target.stem(), true)
                ),
            ]
        }
        Plan::NoAction => vec![report::outcome_message(RunOutcome::NoAction)],
    }
}

fn print_dry_run(plan: &Plan, target: &TargetFile, config: &ConfigFile) {
    println!("dofile dry-run: {}", target.path().display());
    for line in describe_plan(plan, target, config) {
        println!("{line}");
    }
    debug!("dry-run complete (no execution)");
}
