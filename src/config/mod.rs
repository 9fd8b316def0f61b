// src/config/mod.rs

//! Optional `dofile` configuration.
//!
//! Everything has a built-in default, so running without a config file is
//! the normal case. A config file only renames tools or moves the LaTeX
//! build dir.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_for_cli, load_from_path};
pub use model::{ConfigFile, LatexSection, RawConfigFile, ToolsSection};
