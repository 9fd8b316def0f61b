// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "DOFILE_CONFIG";

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; semantic checks happen in
/// [`load_and_validate`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Per-user config location: `<config dir>/dofile/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dofile").join("config.toml"))
}

/// Resolve and load the config for a CLI invocation.
///
/// 1. `--config <PATH>`: must exist.
/// 2. `DOFILE_CONFIG`: must exist.
/// 3. [`default_config_path`], only if the file exists.
/// 4. Built-in defaults.
pub fn load_for_cli(cli_path: Option<&Path>) -> Result<ConfigFile> {
    let explicit = cli_path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading config");
        return load_and_validate(&path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            debug!(path = %path.display(), "loading user config");
            load_and_validate(&path)
        }
        _ => {
            debug!("no config file; using defaults");
            Ok(ConfigFile::default())
        }
    }
}
