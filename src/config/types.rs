//! Configuration constants and default value functions.

/// Sentinel substituted for any missing or blank answer.
pub const DEFAULT_ANSWER: &str = "Not specified";

pub(crate) fn default_answer() -> String {
    DEFAULT_ANSWER.to_string()
}

pub(crate) fn default_banner_width() -> usize {
    80
}

pub(crate) fn default_true() -> bool {
    true
}
