// src/directive/mod.rs

//! Everything `dofile` reads out of a file's first line.
//!
//! - [`parser`] finds an explicit `-{ a | b }` pipeline directive.
//! - [`placeholder`] substitutes `%f` / `%n` in pipeline stages.
//! - [`flags`] tokenizes the line into behaviour flags and the inline
//!   `-( ... )` arguments used by the filetype handlers.

pub mod flags;
pub mod parser;
pub mod placeholder;

pub use flags::FirstLine;
pub use parser::{PipelineSpec, parse_directive};
pub use placeholder::substitute;

use std::path::Path;

use tracing::warn;

use crate::fs::FileSystem;

/// Read the first line of `path`, without its line terminator.
///
/// Only the bytes up to the first `\n` are decoded, lossily, so a source
/// in a non-UTF-8 encoding still yields its flags. An unreadable or empty
/// file yields an empty line; the caller then falls through to filetype
/// dispatch.
pub fn read_first_line(fs: &dyn FileSystem, path: &Path) -> String {
    match fs.read(path) {
        Ok(bytes) => {
            let end = bytes.iter().position(|&b| b == b'\n').unwrap_or(bytes.len());
            let line = bytes[..end].strip_suffix(b"\r").unwrap_or(&bytes[..end]);
            String::from_utf8_lossy(line)
                .trim_start_matches('\u{feff}')
                .to_string()
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read file; treating first line as empty");
            String::new()
        }
    }
}
