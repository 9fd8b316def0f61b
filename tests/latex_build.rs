mod common;

use std::path::{Path, PathBuf};

use common::{BUILD_DIR, TEMP_ROOT, WORK_DIR};
use dofile::config::ConfigFile;
use dofile::directive::FirstLine;
use dofile::fs::mock::MockFileSystem;
use dofile::latex::{LatexBuild, LatexOptions};
use dofile::types::TargetFile;
use dofile_test_utils::builders::ConfigFileBuilder;
use dofile_test_utils::fake_runner::FakeRunner;

fn config() -> ConfigFile {
    ConfigFileBuilder::new()
        .with_temp_root(TEMP_ROOT)
        .with_opener("open-pdf")
        .build()
}

/// Pretend the engine already wrote `<build dir>/<stem>.pdf`.
fn engine_output(fs: &MockFileSystem, stem: &str) {
    fs.add_file(format!("{BUILD_DIR}/{stem}.pdf"), b"%PDF-1.5".to_vec());
}

fn build(
    fs: &MockFileSystem,
    runner: &mut FakeRunner,
    cfg: &ConfigFile,
    target: &TargetFile,
    first_line: &str,
) -> dofile::latex::BuildReport {
    let options = LatexOptions::from_first_line(&FirstLine::new(first_line));
    let mut build = LatexBuild::new(fs, runner, &cfg.latex, cfg.tools.opener_command());
    build.run(target, &options, common::build_day()).unwrap()
}

#[test]
fn alpha_build_runs_a_single_pass() {
    common::init_tracing();
    let (fs, target) = common::mock_with_source("paper.tex", "% nothing special");
    engine_output(&fs, "paper");
    let mut runner = FakeRunner::new();

    let report = build(&fs, &mut runner, &config(), &target, "% nothing special");

    assert_eq!(report.exit_code, 0);
    assert_eq!(
        runner.commands(),
        vec![
            format!("pdflatex -interaction=nonstopmode -output-directory={BUILD_DIR} paper"),
            "open-pdf paper-20261014Wed-alpha.pdf".to_string(),
        ]
    );
    assert_eq!(
        report.artifact,
        Some(PathBuf::from("/work/paper-20261014Wed-alpha.pdf"))
    );
    assert!(fs.contents("/work/paper-20261014Wed-alpha.pdf").is_some());
    assert!(fs.contents(format!("{BUILD_DIR}/paper.pdf")).is_none());
}

#[test]
fn beta_build_runs_two_passes_and_no_bibtex() {
    let (fs, target) = common::mock_with_source("paper.tex", "% -beta");
    engine_output(&fs, "paper");
    let mut runner = FakeRunner::new();

    let report = build(&fs, &mut runner, &config(), &target, "% -beta");

    assert_eq!(report.exit_code, 0);
    let commands = runner.commands();
    let passes = commands.iter().filter(|c| c.starts_with("pdflatex")).count();
    assert_eq!(passes, 2);
    assert!(!commands.iter().any(|c| c.starts_with("bibtex")));
    assert_eq!(
        commands[1],
        format!("pdflatex -output-directory={BUILD_DIR} paper")
    );
    assert!(fs.contents("/work/paper-20261014Wed-beta.pdf").is_some());
}

#[test]
fn release_build_copies_bibliographies_and_runs_bibtex_in_build_dir() {
    let (fs, target) = common::mock_with_source("paper.tex", "% -rel -xe se");
    fs.add_file("/work/refs.bib", b"@book{a}".to_vec());
    fs.add_file("/work/more.bib", b"@book{b}".to_vec());
    fs.add_file("/work/notes.txt", b"not a bib".to_vec());
    fs.add_file(format!("{BUILD_DIR}/refs.bib"), b"stale".to_vec());
    engine_output(&fs, "paper");
    let mut runner = FakeRunner::new();

    let report = build(&fs, &mut runner, &config(), &target, "% -rel -xe se");
    assert_eq!(report.exit_code, 0);

    assert_eq!(fs.contents(format!("{BUILD_DIR}/refs.bib")).unwrap(), b"@book{a}");
    assert_eq!(fs.contents(format!("{BUILD_DIR}/more.bib")).unwrap(), b"@book{b}");
    assert!(fs.contents(format!("{BUILD_DIR}/notes.txt")).is_none());

    let records = runner.records();
    let typeset = format!("xelatex -output-directory={BUILD_DIR} --shell-escape paper");
    assert_eq!(
        records.iter().map(|r| r.command.as_str()).collect::<Vec<_>>(),
        vec![
            format!("xelatex -interaction=nonstopmode -output-directory={BUILD_DIR} --shell-escape paper").as_str(),
            "bibtex paper",
            typeset.as_str(),
            typeset.as_str(),
            "open-pdf paper-20261014Wed-release.pdf",
        ]
    );
    assert_eq!(records[1].cwd, Path::new(BUILD_DIR));
    assert_eq!(records[2].cwd, Path::new(WORK_DIR));
    assert_eq!(records[4].cwd, Path::new(WORK_DIR));
}

#[test]
fn failing_first_pass_aborts_the_build() {
    let (fs, target) = common::mock_with_source("paper.tex", "% -rel");
    fs.add_file("/work/paper-20261001Thu-alpha.pdf", b"old".to_vec());
    let mut runner = FakeRunner::new().fail_when("pdflatex -interaction", 7);

    let report = build(&fs, &mut runner, &config(), &target, "% -rel");

    assert_eq!(report.exit_code, 7);
    assert_eq!(report.artifact, None);
    assert_eq!(runner.commands().len(), 1);
    // Nothing is pruned when the build fails.
    assert!(fs.contents("/work/paper-20261001Thu-alpha.pdf").is_some());
}

#[test]
fn secondary_failures_are_lenient_by_default() {
    let (fs, target) = common::mock_with_source("paper.tex", "% -rel");
    engine_output(&fs, "paper");
    let mut runner = FakeRunner::new()
        .fail_when("bibtex", 2)
        .fail_when("pdflatex -output-directory", 1);

    let report = build(&fs, &mut runner, &config(), &target, "% -rel");

    assert_eq!(report.exit_code, 0);
    assert_eq!(runner.commands().len(), 5);
    assert!(fs.contents("/work/paper-20261014Wed-release.pdf").is_some());
}

#[test]
fn strict_mode_stops_at_the_first_secondary_failure() {
    let (fs, target) = common::mock_with_source("paper.tex", "% -rel");
    engine_output(&fs, "paper");
    let cfg = ConfigFileBuilder::new()
        .with_temp_root(TEMP_ROOT)
        .with_opener("open-pdf")
        .strict_secondary_passes(true)
        .build();
    let mut runner = FakeRunner::new().fail_when("bibtex", 2);

    let report = build(&fs, &mut runner, &cfg, &target, "% -rel");

    assert_eq!(report.exit_code, 2);
    assert_eq!(runner.commands().len(), 2);
    assert!(fs.contents("/work/paper-20261014Wed-release.pdf").is_none());
}

#[test]
fn stale_pdfs_are_pruned_but_the_current_name_is_kept() {
    let (fs, target) = common::mock_with_source("paper.tex", "% -beta");
    fs.add_file("/work/paper-20261001Thu-alpha.pdf", b"old".to_vec());
    fs.add_file("/work/paper-20261013Tue-release.pdf", b"old".to_vec());
    fs.add_file("/work/paper-20261014Wed-beta.pdf", b"same day".to_vec());
    fs.add_file("/work/paper.pdf", b"no dash".to_vec());
    fs.add_file("/work/other-20261001Thu-alpha.pdf", b"other doc".to_vec());
    fs.add_file("/work/paper-notes.txt", b"not a pdf".to_vec());
    engine_output(&fs, "paper");
    let mut runner = FakeRunner::new();

    let report = build(&fs, &mut runner, &config(), &target, "% -beta");

    assert_eq!(
        report.pruned,
        vec![
            PathBuf::from("/work/paper-20261001Thu-alpha.pdf"),
            PathBuf::from("/work/paper-20261013Tue-release.pdf"),
        ]
    );
    assert_eq!(
        fs.list(WORK_DIR),
        vec![
            "other-20261001Thu-alpha.pdf",
            "paper-20261014Wed-beta.pdf",
            "paper-notes.txt",
            "paper.pdf",
            "paper.tex",
        ]
    );
    // The same-day artifact was replaced by the fresh engine output.
    assert_eq!(
        fs.contents("/work/paper-20261014Wed-beta.pdf").unwrap(),
        b"%PDF-1.5"
    );
}

#[test]
fn missing_engine_output_is_an_error_and_keeps_older_pdfs() {
    let (fs, target) = common::mock_with_source("paper.tex", "");
    let older = format!("{WORK_DIR}/paper-20261001Thu-alpha.pdf");
    fs.add_file(&older, "old pdf");
    let cfg = config();
    let mut runner = FakeRunner::new();
    let options = LatexOptions::default();

    let mut build = LatexBuild::new(&fs, &mut runner, &cfg.latex, "open-pdf");
    let err = build.run(&target, &options, common::build_day()).unwrap_err();

    assert!(err.to_string().contains("produced no"));
    assert_eq!(fs.contents(&older), Some(b"old pdf".to_vec()));
}

#[test]
fn pythontex_runs_after_a_successful_first_pass() {
    let (fs, target) = common::mock_with_source("paper.tex", "% -py");
    engine_output(&fs, "paper");
    let mut runner = FakeRunner::new();

    build(&fs, &mut runner, &config(), &target, "% -py");

    assert_eq!(
        runner.commands()[1],
        format!("pythontex {BUILD_DIR}/paper")
    );
}

#[test]
fn build_dir_is_created_on_first_use() {
    let (fs, target) = common::mock_with_source("paper.tex", "");
    let mut runner = FakeRunner::new().fail_when("pdflatex", 1);

    build(&fs, &mut runner, &config(), &target, "");

    assert!(fs.list(TEMP_ROOT).contains(&".latexTmp".to_string()));
}
