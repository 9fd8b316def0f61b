// src/dispatch/interpreter.rs

use crate::config::ToolsSection;
use crate::directive::FirstLine;
use crate::directive::flags::aliases;
use crate::errors::Result;
use crate::exec::quote_arg;
use crate::types::TargetFile;

/// How the Python file should be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PythonMode {
    Run,
    Interactive,
    IPython,
    Debugger,
}

impl PythonMode {
    pub fn from_first_line(line: &FirstLine) -> Self {
        // `-ip*` before `-i`: both ask for an interactive session.
        if line.has_any(aliases::IPYTHON) {
            PythonMode::IPython
        } else if line.has_any(aliases::INTERACTIVE) {
            PythonMode::Interactive
        } else if line.has_any(aliases::PDB) {
            PythonMode::Debugger
        } else {
            PythonMode::Run
        }
    }
}

/// `python [-i | -m pdb] <file> [args]` or `ipython -i <file> [args]`.
///
/// `args` is the inline `-( ... )` region, passed through verbatim.
pub fn python_command(target: &TargetFile, line: &FirstLine, tools: &ToolsSection) -> Result<String> {
    let mut parts: Vec<String> = match PythonMode::from_first_line(line) {
        PythonMode::IPython => vec![tools.ipython.clone(), "-i".to_string()],
        PythonMode::Interactive => vec![tools.python.clone(), "-i".to_string()],
        PythonMode::Debugger => vec![tools.python.clone(), "-m".to_string(), "pdb".to_string()],
        PythonMode::Run => vec![tools.python.clone()],
    };
    parts.push(quote_arg(target.file_name()));
    if let Some(args) = line.inline_args()? {
        parts.push(args.to_string());
    }
    Ok(parts.join(" "))
}

/// `node [-i] <file>`.
pub fn node_command(target: &TargetFile, line: &FirstLine, tools: &ToolsSection) -> String {
    let file = quote_arg(target.file_name());
    if line.has_any(aliases::INTERACTIVE) {
        format!("{} -i {}", tools.node, file)
    } else {
        format!("{} {}", tools.node, file)
    }
}
