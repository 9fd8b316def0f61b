// src/main.rs

use dofile::errors::DofileError;
use dofile::{cli, logging, report, run};

fn main() {
    let args = cli::parse();
    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("dofile: {err:?}");
    }

    let code = match run(args) {
        Ok(outcome) => outcome.exit_code(),
        Err(err @ DofileError::Usage) => {
            report::print_error(&err.to_string());
            1
        }
        Err(err) => {
            report::print_error(&format!("{err:#}"));
            1
        }
    };
    std::process::exit(code);
}
