//! Question catalog and summary-driven question selection.
//!
//! Every run asks the core questions, then any supplemental questions whose
//! topic keyword appears in the summary, then the extra questions.

mod catalog;
mod selector;


pub use selector::resolve_questions;

/// A single clarifying question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Unique identifier, used as the answer key.
    pub key: &'static str,
    /// Text shown to the user.
    pub prompt: &'static str,
    /// Example or clarifying text shown under the prompt.
    pub hint: &'static str,
}
