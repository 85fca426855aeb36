//! Configuration model for oneshot.
//!
//! An optional YAML file passed with `--config`. It supports forward-compatible
//! parsing (unknown fields are ignored), sensible defaults for every field,
//! and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::DEFAULT_ANSWER;
