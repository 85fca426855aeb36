//! Answer collection.
//!
//! Two sources produce an [`AnswerSet`] for a resolved question sequence:
//!
//! - [`InteractiveSource`]: asks each question on a terminal, one line per answer
//! - [`BatchSource`]: reads pre-supplied answers from a JSON object
//!
//! Either way every question ends up with a normalized, non-empty answer.
//! Blank or missing answers fall back to the configured default.

mod batch;
mod interactive;


pub use batch::BatchSource;
pub use interactive::InteractiveSource;

use crate::error::Result;
use crate::questions::Question;
use crate::text::normalize;

/// Something that can produce one answer per question.
pub trait AnswerSource {
    /// Collect answers for `questions`, in order.
    fn collect(&mut self, questions: &[&Question]) -> Result<AnswerSet>;
}

/// Answers keyed by question key, kept in question order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: Vec<(String, String)>,
}

impl AnswerSet {
    /// Create an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any earlier answer for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// The answer recorded for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(key, answer)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalize a raw answer, substituting `default_answer` when it is missing
/// or blank.
pub fn resolve_answer(raw: Option<&str>, default_answer: &str) -> String {
    let value = raw.map(normalize).unwrap_or_default();
    if value.is_empty() {
        normalize(default_answer)
    } else {
        value
    }
}
