// src/latex/options.rs

use std::fmt;

use crate::config::LatexSection;
use crate::directive::FirstLine;
use crate::directive::flags::aliases;

/// Typesetting engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    #[default]
    PdfLatex,
    LuaLatex,
    XeLatex,
}

impl Engine {
    /// Executable for this engine as configured.
    pub fn command<'a>(&self, cfg: &'a LatexSection) -> &'a str {
        match self {
            Engine::PdfLatex => &cfg.pdflatex,
            Engine::LuaLatex => &cfg.lualatex,
            Engine::XeLatex => &cfg.xelatex,
        }
    }
}

/// Version tier of a build; also decides how many extra passes run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tier {
    #[default]
    Alpha,
    Beta,
    Release,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Alpha => "alpha",
            Tier::Beta => "beta",
            Tier::Release => "release",
        }
    }

    /// Typeset passes after the first one.
    pub fn extra_passes(&self) -> usize {
        match self {
            Tier::Alpha => 0,
            Tier::Beta => 1,
            Tier::Release => 2,
        }
    }

    pub fn runs_bibliography(&self) -> bool {
        matches!(self, Tier::Release)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a `.tex` first line can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LatexOptions {
    pub engine: Engine,
    pub shell_escape: bool,
    pub tier: Tier,
    pub pythontex: bool,
}

impl LatexOptions {
    pub fn from_first_line(line: &FirstLine) -> Self {
        let engine = if line.has_any(aliases::LUALATEX) {
            Engine::LuaLatex
        } else if line.has_any(aliases::XELATEX) {
            Engine::XeLatex
        } else {
            Engine::PdfLatex
        };

        let tier = if line.has_any(aliases::RELEASE) {
            Tier::Release
        } else if line.has_any(aliases::BETA) {
            Tier::Beta
        } else {
            Tier::Alpha
        };

        Self {
            engine,
            shell_escape: line.has_any(aliases::SHELL_ESCAPE),
            tier,
            pythontex: line.has_any(aliases::PYTHONTEX),
        }
    }
}
