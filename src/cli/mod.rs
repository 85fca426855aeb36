//! CLI argument parsing for oneshot.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The pipeline itself lives in the `commands` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Oneshot: turn a one-line project summary into a complete one-shot AI prompt.
///
/// Asks targeted clarification questions (more of them when the summary
/// mentions web, api, data, or agent work), then prints a structured prompt
/// ready to paste into an assistant.
#[derive(Parser, Debug)]
#[command(name = "oneshot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Basic summary of what you want to build.
    pub summary: String,

    /// JSON object of pre-filled answers for non-interactive use.
    ///
    /// Keys are question keys (e.g. `goal`, `audience`); missing or blank
    /// answers become "Not specified".
    #[arg(long, value_name = "JSON")]
    pub answers_json: Option<String>,

    /// Path to a YAML config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_summary_only() {
        let cli = Cli::try_parse_from(["oneshot", "Build a web app"]).unwrap();
        assert_eq!(cli.summary, "Build a web app");
        assert!(cli.answers_json.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_all_options() {
        let cli = Cli::try_parse_from([
            "oneshot",
            "An agent",
            "--answers-json",
            r#"{"goal":"x"}"#,
            "--config",
            "oneshot.yaml",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.summary, "An agent");
        assert_eq!(cli.answers_json.as_deref(), Some(r#"{"goal":"x"}"#));
        assert_eq!(cli.config, Some(PathBuf::from("oneshot.yaml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn summary_is_required() {
        let err = Cli::try_parse_from(["oneshot"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
