//! Error types for the oneshot CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::prompt::TemplateError;
use thiserror::Error;

/// Main error type for oneshot operations.
///
/// Every variant is fatal: the process prints the message and exits with
/// the variant's exit code without producing any prompt output.
#[derive(Error, Debug)]
pub enum OneshotError {
    /// The summary was empty after whitespace normalization.
    #[error("Summary cannot be empty.")]
    EmptySummary,

    /// The `--answers-json` payload did not decode to a JSON object.
    #[error("Invalid JSON for --answers-json: {0}")]
    MalformedPayload(String),

    /// The config file could not be read, parsed, or validated.
    #[error("{0}")]
    ConfigError(String),

    /// The prompt template could not be rendered.
    #[error("failed to render prompt: {0}")]
    Template(#[from] TemplateError),

    /// Reading answers or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OneshotError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            OneshotError::EmptySummary => exit_codes::USER_ERROR,
            OneshotError::MalformedPayload(_) => exit_codes::USER_ERROR,
            OneshotError::ConfigError(_) => exit_codes::USER_ERROR,
            OneshotError::Template(_) => exit_codes::USER_ERROR,
            OneshotError::Io(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for oneshot operations.
pub type Result<T> = std::result::Result<T, OneshotError>;
