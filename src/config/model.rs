//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a oneshot run.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text used for questions left unanswered (default: "Not specified").
    #[serde(default = "default_answer")]
    pub default_answer: String,

    /// Width of the `=` banner lines framing the generated prompt.
    #[serde(default = "default_banner_width")]
    pub banner_width: usize,

    /// Whether interactive mode prints its introduction line.
    #[serde(default = "default_true")]
    pub show_intro: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_answer: default_answer(),
            banner_width: default_banner_width(),
            show_intro: default_true(),
        }
    }
}
