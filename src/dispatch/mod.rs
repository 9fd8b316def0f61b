// src/dispatch/mod.rs

//! Decide what to do with a target file.
//!
//! An explicit `-{ ... }` directive always wins. Without one, the file
//! extension picks a built-in handler, which reads its flags from the same
//! first line. The result is a [`Plan`]; nothing here starts a process.

pub mod document;
pub mod interpreter;

use std::fmt;

use crate::config::ConfigFile;
use crate::directive::{FirstLine, PipelineSpec, parse_directive};
use crate::errors::Result;
use crate::latex::LatexOptions;
use crate::types::TargetFile;

/// Built-in handler chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Python,
    JavaScript,
    Latex,
    Markdown,
    Html,
    Cpp,
}

impl Handler {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "py" => Some(Handler::Python),
            "js" | "mjs" => Some(Handler::JavaScript),
            "tex" => Some(Handler::Latex),
            "md" | "pmd" => Some(Handler::Markdown),
            "htm" | "html" => Some(Handler::Html),
            "cpp" | "cc" | "cxx" => Some(Handler::Cpp),
            _ => None,
        }
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Handler::Python => "python",
            Handler::JavaScript => "javascript",
            Handler::Latex => "latex",
            Handler::Markdown => "markdown",
            Handler::Html => "html",
            Handler::Cpp => "c++",
        };
        f.write_str(name)
    }
}

/// Resolved action for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Explicit directive; stages still carry `%f` / `%n`.
    Pipeline(PipelineSpec),
    /// Built-in handler commands, ready to run as-is.
    Commands { handler: Handler, commands: Vec<String> },
    /// LaTeX build with the options read from the first line.
    Latex(LatexOptions),
    /// Unknown extension and no directive.
    NoAction,
}

/// Work out the [`Plan`] for `target` given its first line.
pub fn resolve_plan(target: &TargetFile, first_line: &str, config: &ConfigFile) -> Result<Plan> {
    if let Some(spec) = parse_directive(first_line)? {
        return Ok(Plan::Pipeline(spec));
    }

    let Some(handler) = Handler::from_extension(target.extension()) else {
        return Ok(Plan::NoAction);
    };

    let line = FirstLine::new(first_line);
    let tools = &config.tools;
    let commands = match handler {
        Handler::Python => vec![interpreter::python_command(target, &line, tools)?],
        Handler::JavaScript => vec![interpreter::node_command(target, &line, tools)],
        Handler::Latex => return Ok(Plan::Latex(LatexOptions::from_first_line(&line))),
        Handler::Markdown => document::markdown_commands(target, tools),
        Handler::Html => vec![document::open_command(target.file_name(), tools)],
        Handler::Cpp => document::cpp_commands(target, tools),
    };

    Ok(Plan::Commands { handler, commands })
}
