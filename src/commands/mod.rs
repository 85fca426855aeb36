//! Command implementation for oneshot.
//!
//! `run` wires the real terminal streams and config file into
//! [`generate::cmd_generate`], which drives the pipeline:
//! select questions, collect answers, compose, print.

mod generate;

#[cfg(test)]
mod tests;

pub use generate::cmd_generate;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use std::io;

/// Execute the CLI invocation against stdin/stdout.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    cmd_generate(
        &cli.summary,
        cli.answers_json.as_deref(),
        &config,
        stdin.lock(),
        stdout.lock(),
    )
}
