// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`runner`] holds the [`CommandRunner`] trait and the production
//!   [`ShellRunner`], which hands each command to the platform shell and
//!   blocks until it exits.
//! - [`pipeline`] runs ordered command lists with short-circuiting, and
//!   explicit directives with placeholder substitution on top.
//!
//! Tests replace the runner with a fake that records commands and returns
//! scripted exit codes.

pub mod pipeline;
pub mod runner;

pub use pipeline::{run_commands, run_pipeline};
pub use runner::{CommandRunner, ShellRunner, quote_arg};
