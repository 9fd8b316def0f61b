#![allow(dead_code)]

use std::path::PathBuf;

use dofile::config::{ConfigFile, LatexSection, RawConfigFile, ToolsSection};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                tools: ToolsSection::default(),
                latex: LatexSection::default(),
            },
        }
    }

    /// Put the LaTeX scratch dir at `<root>/.latexTmp`.
    pub fn with_temp_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.latex.temp_root = Some(root.into());
        self
    }

    pub fn with_opener(mut self, opener: &str) -> Self {
        self.config.tools.opener = Some(opener.to_string());
        self
    }

    pub fn with_python(mut self, python: &str) -> Self {
        self.config.tools.python = python.to_string();
        self
    }

    pub fn strict_secondary_passes(mut self, val: bool) -> Self {
        self.config.latex.strict_secondary_passes = val;
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
