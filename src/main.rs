//! Oneshot: turn a project summary into a complete one-shot AI prompt.
//!
//! This is the main entry point for the `oneshot` CLI. It parses arguments,
//! runs the question-and-compose pipeline, and handles errors with proper
//! exit codes.

mod answers;
mod cli;
mod commands;
mod config;
mod error;
mod exit_codes;
mod logging;
mod prompt;
mod questions;
mod text;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logger(cli.verbose);

    match commands::run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            log::debug!("aborting: {:?}", err);
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
