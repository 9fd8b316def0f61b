// src/latex/mod.rs

//! LaTeX build orchestration.
//!
//! - [`options`] turns first-line flags into engine, tier and extras.
//! - [`artifact`] names the versioned output PDF and prunes the ones it
//!   supersedes.
//! - [`build`] runs the passes against the scratch build dir and moves the
//!   result next to the source.

pub mod artifact;
pub mod build;
pub mod options;

pub use artifact::{BuildArtifact, format_timestamp, prune_stale};
pub use build::{BuildReport, LatexBuild};
pub use options::{Engine, LatexOptions, Tier};
