//! End-to-end tests for the generate pipeline.

use crate::commands::cmd_generate;
use crate::config::Config;
use crate::error::OneshotError;
use crate::questions::resolve_questions;
use std::io::{self, BufRead, Cursor, Read};

const SUMMARY: &str = "Build a web API for tracking tasks";

/// A reader that fails the test if anything tries to read from it.
struct NoInput;

impl Read for NoInput {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        panic!("stdin must not be read");
    }
}

impl BufRead for NoInput {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        panic!("stdin must not be read");
    }

    fn consume(&mut self, _amt: usize) {}
}

fn run_batch(summary: &str, payload: &str) -> (crate::error::Result<()>, String) {
    let mut out = Vec::new();
    let result = cmd_generate(summary, Some(payload), &Config::default(), NoInput, &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn full_payload(summary: &str) -> String {
    let map: serde_json::Map<String, serde_json::Value> = resolve_questions(summary)
        .iter()
        .map(|q| (q.key.to_string(), serde_json::json!(format!("{} answer", q.key))))
        .collect();
    serde_json::Value::Object(map).to_string()
}

fn requirement_lines(output: &str) -> Vec<&str> {
    let start = output.find("## Clarified Requirements").unwrap();
    let end = output.find("## Your Task").unwrap();
    output[start..end]
        .lines()
        .filter(|line| line.starts_with("- "))
        .collect()
}

#[test]
fn test_batch_output_is_framed() {
    let (result, output) = run_batch(SUMMARY, &full_payload(SUMMARY));
    result.unwrap();

    let banner = "=".repeat(80);
    let header = format!("\n{banner}\nPERFECT 1-SHOT PROMPT\n{banner}\nYou are an elite");
    assert!(output.starts_with(&header), "{}", output);
    assert!(output.ends_with("free of fluff.\n"));
    assert!(!output.contains("I will ask"));
}

#[test]
fn test_batch_is_byte_identical_across_runs() {
    let payload = full_payload(SUMMARY);
    let (first, a) = run_batch(SUMMARY, &payload);
    let (second, b) = run_batch(SUMMARY, &payload);
    first.unwrap();
    second.unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_batch_missing_keys_still_lists_every_question() {
    let (result, output) = run_batch(SUMMARY, r#"{"goal": "Track tasks"}"#);
    result.unwrap();

    let lines = requirement_lines(&output);
    assert_eq!(lines.len(), resolve_questions(SUMMARY).len());
    assert_eq!(lines[0], "- goal: Track tasks");
    assert!(lines.contains(&"- api_style: Not specified"));
    assert!(lines.contains(&"- examples: Not specified"));
}

#[test]
fn test_summary_is_normalized_in_output() {
    let (result, output) = run_batch("  Build   a\tweb API \n", "{}");
    result.unwrap();

    assert!(output.contains("## Project Summary\n\nBuild a web API\n\n"));
}

#[test]
fn test_empty_summary_fails_before_asking() {
    for summary in ["", "   ", "\t\n "] {
        let mut out = Vec::new();
        let err = cmd_generate(summary, None, &Config::default(), NoInput, &mut out).unwrap_err();

        assert!(matches!(err, OneshotError::EmptySummary));
        assert!(out.is_empty(), "no output on failure");
    }
}

#[test]
fn test_array_payload_is_malformed() {
    let (result, output) = run_batch(SUMMARY, r#"["goal"]"#);

    assert!(matches!(result, Err(OneshotError::MalformedPayload(_))));
    assert!(output.is_empty());
}

#[test]
fn test_invalid_json_payload_is_malformed() {
    let (result, output) = run_batch(SUMMARY, "not json");

    assert!(matches!(result, Err(OneshotError::MalformedPayload(_))));
    assert!(output.is_empty());
}

#[test]
fn test_interactive_run() {
    let questions = resolve_questions("A poem generator");
    let input = format!("Write haiku\n\n{}", "x\n".repeat(questions.len() - 2));

    let mut out = Vec::new();
    cmd_generate(
        "A poem generator",
        None,
        &Config::default(),
        Cursor::new(input.into_bytes()),
        &mut out,
    )
    .unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.starts_with("I will ask targeted questions"));
    let prompts_end = output.find("PERFECT 1-SHOT PROMPT").unwrap();
    assert!(output[..prompts_end].contains("• What should the final deliverable accomplish?"));
    assert!(output[..prompts_end].contains("  Hint: Optional but high-leverage."));

    let lines = requirement_lines(&output);
    assert_eq!(lines.len(), questions.len());
    assert_eq!(lines[0], "- goal: Write haiku");
    assert_eq!(lines[1], "- audience: Not specified");
    assert_eq!(lines[2], "- output_format: x");
}

#[test]
fn test_config_is_applied() {
    let config = Config::from_yaml("default_answer: TBD\nbanner_width: 10\nshow_intro: false\n")
        .unwrap();

    let mut out = Vec::new();
    cmd_generate("A web page", None, &config, Cursor::new(Vec::new()), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(!output.contains("I will ask"));
    assert!(output.contains("\n==========\nPERFECT 1-SHOT PROMPT\n==========\n"));
    assert!(output.contains("- ui_framework: TBD"));
    assert!(!output.contains("Not specified"));
}
