// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [tools]
/// python = "python3"
/// opener = "zathura"
///
/// [latex]
/// pdflatex = "pdflatex"
/// build_dir_name = ".latexTmp"
/// strict_secondary_passes = false
/// ```
///
/// Both sections are optional.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub tools: ToolsSection,

    #[serde(default)]
    pub latex: LatexSection,
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (see `validate.rs`) or
/// `Default`.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub tools: ToolsSection,
    pub latex: LatexSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(tools: ToolsSection, latex: LatexSection) -> Self {
        Self { tools, latex }
    }
}

/// `[tools]` section: executables used by the filetype handlers.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsSection {
    #[serde(default = "default_python")]
    pub python: String,

    #[serde(default = "default_ipython")]
    pub ipython: String,

    #[serde(default = "default_node")]
    pub node: String,

    #[serde(default = "default_pandoc")]
    pub pandoc: String,

    /// C++ compiler used for `.cpp` files.
    #[serde(default = "default_cxx")]
    pub cxx: String,

    /// Command used to open documents. `None` = platform default.
    #[serde(default)]
    pub opener: Option<String>,
}

fn default_python() -> String {
    "python".to_string()
}

fn default_ipython() -> String {
    "ipython".to_string()
}

fn default_node() -> String {
    "node".to_string()
}

fn default_pandoc() -> String {
    "pandoc".to_string()
}

fn default_cxx() -> String {
    "c++".to_string()
}

impl Default for ToolsSection {
    fn default() -> Self {
        Self {
            python: default_python(),
            ipython: default_ipython(),
            node: default_node(),
            pandoc: default_pandoc(),
            cxx: default_cxx(),
            opener: None,
        }
    }
}

impl ToolsSection {
    /// Command prefix that opens a file with the user's default handler.
    pub fn opener_command(&self) -> String {
        match &self.opener {
            Some(opener) => opener.clone(),
            None => platform_opener().to_string(),
        }
    }
}

fn platform_opener() -> &'static str {
    if cfg!(windows) {
        "cmd /C start \"\""
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// `[latex]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LatexSection {
    #[serde(default = "default_pdflatex")]
    pub pdflatex: String,

    #[serde(default = "default_lualatex")]
    pub lualatex: String,

    #[serde(default = "default_xelatex")]
    pub xelatex: String,

    #[serde(default = "default_bibtex")]
    pub bibtex: String,

    #[serde(default = "default_pythontex")]
    pub pythontex: String,

    /// Name of the scratch directory created under `temp_root`.
    #[serde(default = "default_build_dir_name")]
    pub build_dir_name: String,

    /// Parent of the scratch directory. `None` = the system temp dir.
    #[serde(default)]
    pub temp_root: Option<PathBuf>,

    /// Treat a failing secondary typeset/bibtex pass as a failed build.
    ///
    /// Off by default: only the first pass decides the result.
    #[serde(default)]
    pub strict_secondary_passes: bool,
}

fn default_pdflatex() -> String {
    "pdflatex".to_string()
}

fn default_lualatex() -> String {
    "lualatex".to_string()
}

fn default_xelatex() -> String {
    "xelatex".to_string()
}

fn default_bibtex() -> String {
    "bibtex".to_string()
}

fn default_pythontex() -> String {
    "pythontex".to_string()
}

fn default_build_dir_name() -> String {
    ".latexTmp".to_string()
}

impl Default for LatexSection {
    fn default() -> Self {
        Self {
            pdflatex: default_pdflatex(),
            lualatex: default_lualatex(),
            xelatex: default_xelatex(),
            bibtex: default_bibtex(),
            pythontex: default_pythontex(),
            build_dir_name: default_build_dir_name(),
            temp_root: None,
            strict_secondary_passes: false,
        }
    }
}

impl LatexSection {
    /// Scratch directory the engines write into.
    pub fn build_dir(&self) -> PathBuf {
        let root = self.temp_root.clone().unwrap_or_else(std::env::temp_dir);
        root.join(&self.build_dir_name)
    }
}
