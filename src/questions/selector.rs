//! Summary-driven question selection.
//!
//! Matching is a case-insensitive substring test, so "database" triggers the
//! `data` questions and "rapid" triggers the `api` questions.

use super::Question;
use super::catalog::{core_questions, extra_questions, keyword_triggers, supplemental_question};
use std::collections::HashSet;

/// Keywords from the trigger table that occur in `summary`, in table order.
pub fn matched_keywords(summary: &str) -> Vec<&'static str> {
    let summary = summary.to_lowercase();
    keyword_triggers()
        .iter()
        .filter(|(keyword, _)| summary.contains(keyword))
        .map(|(keyword, _)| *keyword)
        .collect()
}

/// Supplemental questions triggered by `summary`.
///
/// Keys are collected in keyword-table order, then in declared order within
/// each keyword, and deduplicated keeping the first occurrence.
pub fn keyword_questions(summary: &str) -> Vec<&'static Question> {
    let summary = summary.to_lowercase();
    let mut seen = HashSet::new();

    keyword_triggers()
        .iter()
        .filter(|(keyword, _)| summary.contains(keyword))
        .flat_map(|(_, keys)| keys.iter())
        .filter(|key| seen.insert(**key))
        .filter_map(|key| {
            let question = supplemental_question(key);
            if question.is_none() {
                log::warn!("keyword table references unknown question '{}'", key);
            }
            question
        })
        .collect()
}

/// The full ordered question sequence for `summary`: core, then triggered
/// supplemental questions, then extra questions.
pub fn resolve_questions(summary: &str) -> Vec<&'static Question> {
    let supplemental = keyword_questions(summary);

    log::debug!(
        "matched keywords {:?}; {} supplemental question(s)",
        matched_keywords(summary),
        supplemental.len()
    );

    core_questions()
        .iter()
        .chain(supplemental)
        .chain(extra_questions().iter())
        .collect()
}
