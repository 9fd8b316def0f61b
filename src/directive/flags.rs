// src/directive/flags.rs

//! First-line flag tokenizer.
//!
//! Flags are whitespace-separated tokens compared exactly against alias
//! lists, so `-ipy` never also counts as `-i`, and a word like `seems` is
//! not mistaken for the `se` flag. The inline arguments region `-( ... )`
//! is cut out before tokenizing so arguments meant for the script cannot
//! switch handler modes.

use crate::errors::{DofileError, Result};

pub const ARGS_START_MARKER: &str = "-(";
pub const ARGS_END_MARKER: char = ')';

/// Alias lists for every flag the built-in handlers understand.
pub mod aliases {
    pub const IPYTHON: &[&str] = &["-ip", "-ipy", "-ipython"];
    pub const INTERACTIVE: &[&str] = &["-i", "-inter", "-interact", "-interactive"];
    pub const PDB: &[&str] = &["-pdb"];

    pub const LUALATEX: &[&str] = &["-lua", "-luatex", "-lualatex"];
    pub const XELATEX: &[&str] = &["-xe", "-xetex", "-xelatex"];
    pub const SHELL_ESCAPE: &[&str] = &["se", "-se"];
    pub const RELEASE: &[&str] = &["-rel", "-fin", "-final"];
    pub const BETA: &[&str] = &["-beta"];
    pub const PYTHONTEX: &[&str] = &["-py"];
}

/// Where the inline arguments region sits in the line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum InlineArgs {
    Absent,
    Present(String),
    Unterminated { column: usize },
}

/// Tokenized view of a file's first line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstLine {
    tokens: Vec<String>,
    inline_args: InlineArgs,
}

impl FirstLine {
    pub fn new(line: &str) -> Self {
        let (inline_args, flag_text) = match line.find(ARGS_START_MARKER) {
            None => (InlineArgs::Absent, line.to_string()),
            Some(start) => {
                let body_start = start + ARGS_START_MARKER.len();
                match line[body_start..].find(ARGS_END_MARKER) {
                    Some(len) => {
                        let body_end = body_start + len;
                        let args = line[body_start..body_end].trim().to_string();
                        let rest = format!("{} {}", &line[..start], &line[body_end + 1..]);
                        (InlineArgs::Present(args), rest)
                    }
                    None => (
                        InlineArgs::Unterminated { column: start + 1 },
                        line.to_string(),
                    ),
                }
            }
        };

        let tokens = flag_text.split_whitespace().map(str::to_string).collect();

        Self {
            tokens,
            inline_args,
        }
    }

    /// True if any token equals one of `aliases`.
    pub fn has_any(&self, aliases: &[&str]) -> bool {
        self.tokens.iter().any(|t| aliases.contains(&t.as_str()))
    }

    /// Trailing script arguments from `-( ... )`.
    ///
    /// `Ok(None)` when there is no such region; an empty region yields
    /// `Ok(None)` as well.
    pub fn inline_args(&self) -> Result<Option<&str>> {
        match &self.inline_args {
            InlineArgs::Absent => Ok(None),
            InlineArgs::Present(args) if args.is_empty() => Ok(None),
            InlineArgs::Present(args) => Ok(Some(args.as_str())),
            InlineArgs::Unterminated { column } => Err(DofileError::Directive(format!(
                "unterminated inline arguments: found `{ARGS_START_MARKER}` at column {column} but no closing `{ARGS_END_MARKER}`"
            ))),
        }
    }
}
