use dofile::directive::{FirstLine, PipelineSpec, parse_directive, substitute};
use dofile::directive::flags::aliases;
use dofile::errors::DofileError;

#[test]
fn no_start_marker_means_no_directive() {
    assert_eq!(parse_directive("# just a comment").unwrap(), None);
    assert_eq!(parse_directive("").unwrap(), None);
}

#[test]
fn stages_are_split_and_trimmed() {
    let spec = parse_directive("// -{ gcc %f -o %n |  ./%n  }").unwrap().unwrap();
    assert_eq!(spec.stages(), &["gcc %f -o %n".to_string(), "./%n".to_string()]);
}

#[test]
fn directive_without_separator_is_single_stage() {
    let spec = parse_directive("# -{make}").unwrap().unwrap();
    assert_eq!(spec, PipelineSpec::new(["make"]));
}

#[test]
fn unterminated_directive_is_an_error() {
    match parse_directive("# -{ echo never closed") {
        Err(DofileError::Directive(msg)) => assert!(msg.contains("unterminated")),
        other => panic!("expected Directive error, got {:?}", other),
    }
}

#[test]
fn empty_directive_is_an_error() {
    assert!(matches!(
        parse_directive("# -{ | }"),
        Err(DofileError::Directive(_))
    ));
}

#[test]
fn placeholders_are_replaced_everywhere() {
    assert_eq!(
        substitute("cp %f %n.bak && cat %f", "demo.txt", "demo"),
        "cp demo.txt demo.bak && cat demo.txt"
    );
}

#[test]
fn command_without_placeholders_is_unchanged() {
    assert_eq!(substitute("echo 100% done", "a.txt", "a"), "echo 100% done");
}

#[test]
fn replacement_values_are_not_rescanned() {
    assert_eq!(substitute("echo %f", "%n.txt", "%n"), "echo %n.txt");
}

#[test]
fn flags_match_whole_tokens_only() {
    let line = FirstLine::new("# -ipy");
    assert!(line.has_any(aliases::IPYTHON));
    assert!(!line.has_any(aliases::INTERACTIVE));

    let line = FirstLine::new("% this seems fine");
    assert!(!line.has_any(aliases::SHELL_ESCAPE));
    assert!(FirstLine::new("% -xe se").has_any(aliases::SHELL_ESCAPE));
}

#[test]
fn inline_args_are_extracted_and_hidden_from_flags() {
    let line = FirstLine::new("# -( --verbose -i data.csv )");
    assert_eq!(line.inline_args().unwrap(), Some("--verbose -i data.csv"));
    assert!(!line.has_any(aliases::INTERACTIVE));
}

#[test]
fn missing_or_empty_inline_args_yield_none() {
    assert_eq!(FirstLine::new("# -i").inline_args().unwrap(), None);
    assert_eq!(FirstLine::new("# -()").inline_args().unwrap(), None);
}

#[test]
fn unterminated_inline_args_is_an_error() {
    let line = FirstLine::new("# -i -(oops");
    assert!(matches!(line.inline_args(), Err(DofileError::Directive(_))));
    // Flags still work on the rest of the line.
    assert!(line.has_any(aliases::INTERACTIVE));
}

#[test]
fn first_line_is_read_without_terminator() {
    use dofile::directive::read_first_line;
    use dofile::fs::mock::MockFileSystem;
    use std::path::Path;

    let fs = MockFileSystem::new();
    fs.add_file("/w/a.py", "\u{feff}# -i\r\nprint(1)\n");
    fs.add_file("/w/empty.py", "");

    assert_eq!(read_first_line(&fs, Path::new("/w/a.py")), "# -i");
    assert_eq!(read_first_line(&fs, Path::new("/w/empty.py")), "");
    assert_eq!(read_first_line(&fs, Path::new("/w/missing.py")), "");
}

#[test]
fn first_line_survives_non_utf8_contents() {
    use dofile::directive::read_first_line;
    use dofile::fs::mock::MockFileSystem;
    use std::path::Path;

    let fs = MockFileSystem::new();
    // Latin-1 "é" (0xE9) on the second line and inside the first.
    fs.add_file("/w/paper.tex", b"% -rel caf\xe9\n\\section{R\xe9sum\xe9}\n".to_vec());

    let line = read_first_line(&fs, Path::new("/w/paper.tex"));
    assert!(line.starts_with("% -rel caf"));
    assert_eq!(line.lines().count(), 1);
    assert!(dofile::directive::FirstLine::new(&line).has_any(&["-rel"]));
}
