#![cfg(unix)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
    config: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("dofile.toml");
        std::fs::write(&config, "").unwrap();
        Self { dir, config }
    }

    fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn run(&self, args: &[&Path]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_dofile"))
            .arg("--config")
            .arg(&self.config)
            .args(args)
            .env_remove("DOFILE_LOG")
            .output()
            .unwrap()
    }
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn missing_file_argument_exits_with_one() {
    let ws = Workspace::new();
    let out = ws.run(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("no file given"));
}

#[test]
fn directive_pipeline_short_circuits() {
    let ws = Workspace::new();
    let file = ws.file(
        "demo.txt",
        "-{ echo %n | echo fail && exit 1 | echo unreachable}\nbody\n",
    );

    let out = ws.run(&[file.as_path()]);
    let text = stdout(&out);

    assert_eq!(out.status.code(), Some(1));
    assert!(text.contains("$ echo demo\n"));
    assert!(text.contains("\ndemo\n"));
    assert!(text.contains("fail"));
    assert!(!text.contains("unreachable"));
    assert!(text.contains("PREVIOUS COMMAND EXITED WITH 1"));
}

#[test]
fn commands_run_next_to_the_target() {
    let ws = Workspace::new();
    let file = ws.file("make-marker.txt", "-{ touch %n.done }\n");

    let out = ws.run(&[file.as_path()]);

    assert_eq!(out.status.code(), Some(0));
    assert!(ws.dir.path().join("make-marker.done").is_file());
    assert!(stdout(&out).contains("Completed without errors"));
}

#[test]
fn unknown_extension_reports_no_action() {
    let ws = Workspace::new();
    let file = ws.file("data.foo", "nothing to see\n");

    let out = ws.run(&[file.as_path()]);

    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("No defined action"));
    assert!(!text.contains("$ "));
}

#[test]
fn unterminated_directive_is_a_hard_error() {
    let ws = Workspace::new();
    let file = ws.file("broken.txt", "-{ echo never closed\n");

    let out = ws.run(&[file.as_path()]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unterminated directive"));
    assert!(!stdout(&out).contains("$ echo"));
}

#[test]
fn dry_run_prints_without_executing() {
    let ws = Workspace::new();
    let file = ws.file("dry.txt", "-{ touch %n.done }\n");

    let out = Command::new(env!("CARGO_BIN_EXE_dofile"))
        .arg("--config")
        .arg(&ws.config)
        .arg("--dry-run")
        .arg(&file)
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("$ touch dry.done"));
    assert!(!ws.dir.path().join("dry.done").exists());
}
