// src/dispatch/document.rs

//! Handlers that convert or compile rather than interpret.

use crate::config::ToolsSection;
use crate::exec::quote_arg;
use crate::types::TargetFile;

/// Open `file` (relative to the target dir) with the configured opener.
pub fn open_command(file: &str, tools: &ToolsSection) -> String {
    format!("{} {}", tools.opener_command(), quote_arg(file))
}

/// Render to standalone HTML with pandoc, then open the result.
pub fn markdown_commands(target: &TargetFile, tools: &ToolsSection) -> Vec<String> {
    let html = format!("{}.htm", target.stem());
    vec![
        format!(
            "{} {} -o {} --standalone",
            tools.pandoc,
            quote_arg(target.file_name()),
            quote_arg(&html)
        ),
        open_command(&html, tools),
    ]
}

/// Compile to `<stem>` and run it if compilation succeeded.
pub fn cpp_commands(target: &TargetFile, tools: &ToolsSection) -> Vec<String> {
    let binary = if cfg!(windows) {
        format!("{}.exe", target.stem())
    } else {
        target.stem().to_string()
    };
    let run = if cfg!(windows) {
        quote_arg(&format!(".\\{binary}"))
    } else {
        quote_arg(&format!("./{binary}"))
    };
    vec![
        format!(
            "{} {} -o {}",
            tools.cxx,
            quote_arg(target.file_name()),
            quote_arg(&binary)
        ),
        run,
    ]
}
