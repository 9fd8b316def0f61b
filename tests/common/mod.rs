#![allow(dead_code)]

use chrono::NaiveDate;
use dofile::fs::mock::MockFileSystem;
use dofile::types::TargetFile;

pub use dofile_test_utils::init_tracing;

pub const WORK_DIR: &str = "/work";
pub const TEMP_ROOT: &str = "/scratch";
pub const BUILD_DIR: &str = "/scratch/.latexTmp";

/// Wednesday, used to date every LaTeX artifact in the tests.
pub fn build_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

/// Mock filesystem holding `/work/<name>` with `first_line` as content.
pub fn mock_with_source(name: &str, first_line: &str) -> (MockFileSystem, TargetFile) {
    let fs = MockFileSystem::new();
    let path = format!("{WORK_DIR}/{name}");
    fs.add_file(&path, format!("{first_line}\n\\documentclass{{article}}\n"));
    (fs, TargetFile::from_path(path))
}
