//! Whitespace normalization shared by the summary and every answer.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Collapse every run of whitespace to a single space and trim both ends.
///
/// Idempotent: normalizing an already-normalized string returns it unchanged.
pub fn normalize(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_internal_runs() {
        assert_eq!(normalize("a  b\t\tc\n\nd"), "a b c d");
    }

    #[test]
    fn trims_both_ends() {
        assert_eq!(normalize("  \n hello world \t "), "hello world");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(normalize(" \t\r\n "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn unicode_whitespace_is_collapsed() {
        assert_eq!(normalize("a\u{00A0}\u{2003}b"), "a b");
    }

    #[test]
    fn is_idempotent() {
        for input in [
            "",
            "plain",
            "  Build a   web API\nfor tracking tasks  ",
            "\ttabs\tand\r\nnewlines\t",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {:?}", input);
        }
    }
}
