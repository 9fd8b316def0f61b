// src/exec/runner.rs

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::report;
use crate::types::ExitCode;

/// Trait abstracting how a single command line is executed.
///
/// Implementations must block until the command has finished; ordering and
/// short-circuiting are decided by the caller from the returned code.
pub trait CommandRunner {
    /// Run `command` with `cwd` as its working directory and return its
    /// exit code.
    ///
    /// `Err` means the command could not be started at all.
    fn run(&mut self, command: &str, cwd: &Path) -> Result<ExitCode>;
}

/// Runs commands through `sh -c` (or `cmd /C` on Windows).
///
/// Children inherit stdin/stdout/stderr so interactive interpreters and
/// engines prompting on errors behave as if started by hand. Every command
/// is echoed as `$ <command>` before it starts.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    echo: bool,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self { echo: true }
    }

    /// Same runner without the `$ <command>` echo.
    pub fn quiet() -> Self {
        Self { echo: false }
    }

    fn shell_command(command: &str) -> Command {
        if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(command);
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c").arg(command);
            c
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &str, cwd: &Path) -> Result<ExitCode> {
        if self.echo {
            report::echo_command(command);
        }
        info!(cmd = %command, cwd = %cwd.display(), "starting process");

        let status = Self::shell_command(command)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("spawning process for `{command}`"))?;

        let code = status.code().unwrap_or(-1);
        debug!(cmd = %command, exit_code = code, success = status.success(), "process exited");
        Ok(code)
    }
}

/// Quote `arg` for the shell [`ShellRunner`] hands commands to.
///
/// Plain words are returned unchanged, so `python demo.py` stays readable
/// in the echo.
pub fn quote_arg(arg: &str) -> String {
    if cfg!(windows) {
        if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '&' || c == '|') {
            format!("\"{arg}\"")
        } else {
            arg.to_string()
        }
    } else {
        shell_words::quote(arg).into_owned()
    }
}
