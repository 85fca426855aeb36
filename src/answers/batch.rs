//! Pre-supplied answers for non-interactive runs.
//!
//! The payload is a JSON object mapping question keys to answers. Strings
//! are used as-is; numbers and booleans use their JSON text; arrays and
//! objects use their compact JSON form; `null` counts as unanswered.

use super::{AnswerSet, AnswerSource, resolve_answer};
use crate::config::DEFAULT_ANSWER;
use crate::error::{OneshotError, Result};
use crate::questions::Question;
use serde_json::{Map, Value};

/// Answers decoded from an `--answers-json` payload.
#[derive(Debug, Clone)]
pub struct BatchSource {
    answers: Map<String, Value>,
    default_answer: String,
}

impl BatchSource {
    /// Parse a payload.
    ///
    /// # Returns
    ///
    /// * `Ok(BatchSource)` - The payload is a JSON object
    /// * `Err(OneshotError::MalformedPayload)` - Invalid JSON, or a top-level
    ///   value that is not an object
    pub fn parse(payload: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|e| OneshotError::MalformedPayload(e.to_string()))?;

        match value {
            Value::Object(answers) => Ok(Self {
                answers,
                default_answer: DEFAULT_ANSWER.to_string(),
            }),
            other => Err(OneshotError::MalformedPayload(format!(
                "answers must decode to an object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Override the text recorded for missing or blank answers.
    pub fn default_answer(mut self, default_answer: impl Into<String>) -> Self {
        self.default_answer = default_answer.into();
        self
    }
}

impl AnswerSource for BatchSource {
    fn collect(&mut self, questions: &[&Question]) -> Result<AnswerSet> {
        let mut answers = AnswerSet::new();
        for question in questions {
            let raw = self.answers.get(question.key).and_then(value_text);
            answers.insert(
                question.key,
                resolve_answer(raw.as_deref(), &self.default_answer),
            );
        }

        for key in self.answers.keys() {
            if !questions.iter().any(|q| q.key == key) {
                log::debug!("ignoring answer for unasked question '{}'", key);
            }
        }

        Ok(answers)
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
