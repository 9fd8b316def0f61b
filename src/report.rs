// src/report.rs

//! Operator-facing output on stdout.
//!
//! Kept apart from `tracing` logs: these lines are what the user reads in
//! the editor's terminal windows after a run.

use crate::types::RunOutcome;

pub fn echo_command(command: &str) {
    println!("$ {command}");
}

/// Final status line for a run.
pub fn outcome_message(outcome: RunOutcome) -> String {
    match outcome {
        RunOutcome::Completed(0) => "Completed without errors".to_string(),
        RunOutcome::Completed(code) => format!("PREVIOUS COMMAND EXITED WITH {code}"),
        RunOutcome::NoAction => "No defined action".to_string(),
    }
}

pub fn print_outcome(outcome: RunOutcome) {
    println!();
    println!("{}", outcome_message(outcome));
}

pub fn print_error(message: &str) {
    eprintln!("Error: {message}");
}
