use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use dofile::exec::CommandRunner;
use dofile::types::ExitCode;

/// One command the fake was asked to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub command: String,
    pub cwd: PathBuf,
}

/// A fake runner that:
/// - records every command and its working directory
/// - answers with the exit code of the first matching rule, or `0`.
///
/// Rules match when the command *starts with* their prefix, so
/// `fail_when("bibtex", 2)` catches `bibtex paper`.
#[derive(Debug, Clone, Default)]
pub struct FakeRunner {
    executed: Arc<Mutex<Vec<RecordedCommand>>>,
    rules: Vec<(String, ExitCode)>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_when(mut self, prefix: &str, code: ExitCode) -> Self {
        self.rules.push((prefix.to_string(), code));
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.executed
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.command.clone())
            .collect()
    }

    pub fn records(&self) -> Vec<RecordedCommand> {
        self.executed.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&mut self, command: &str, cwd: &Path) -> anyhow::Result<ExitCode> {
        {
            let mut guard = self.executed.lock().unwrap();
            guard.push(RecordedCommand {
                command: command.to_string(),
                cwd: cwd.to_path_buf(),
            });
        }

        let code = self
            .rules
            .iter()
            .find(|(prefix, _)| command.starts_with(prefix.as_str()))
            .map(|(_, code)| *code)
            .unwrap_or(0);
        Ok(code)
    }
}
