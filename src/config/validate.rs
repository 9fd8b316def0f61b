// src/config/validate.rs

use std::path::{Component, Path};

use crate::config::model::{ConfigFile, LatexSection, RawConfigFile, ToolsSection};
use crate::errors::{DofileError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::DofileError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.tools, raw.latex))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_tools(&cfg.tools)?;
    validate_latex(&cfg.latex)?;
    Ok(())
}

fn ensure_non_empty(section: &str, key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DofileError::ConfigError(format!(
            "[{section}].{key} must not be empty"
        )));
    }
    Ok(())
}

fn validate_tools(tools: &ToolsSection) -> Result<()> {
    ensure_non_empty("tools", "python", &tools.python)?;
    ensure_non_empty("tools", "ipython", &tools.ipython)?;
    ensure_non_empty("tools", "node", &tools.node)?;
    ensure_non_empty("tools", "pandoc", &tools.pandoc)?;
    ensure_non_empty("tools", "cxx", &tools.cxx)?;
    if let Some(opener) = &tools.opener {
        ensure_non_empty("tools", "opener", opener)?;
    }
    Ok(())
}

fn validate_latex(latex: &LatexSection) -> Result<()> {
    ensure_non_empty("latex", "pdflatex", &latex.pdflatex)?;
    ensure_non_empty("latex", "lualatex", &latex.lualatex)?;
    ensure_non_empty("latex", "xelatex", &latex.xelatex)?;
    ensure_non_empty("latex", "bibtex", &latex.bibtex)?;
    ensure_non_empty("latex", "pythontex", &latex.pythontex)?;

    // The build dir must be a single plain component under temp_root, so a
    // config can never point the scratch dir at `..` or an absolute path.
    let mut components = Path::new(&latex.build_dir_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(DofileError::ConfigError(format!(
            "[latex].build_dir_name must be a plain directory name (got {:?})",
            latex.build_dir_name
        ))),
    }
}
