//! Final prompt rendering.

use super::template::{render_template, vars};
use crate::answers::AnswerSet;
use crate::error::Result;

/// Title printed between the banner lines.
pub const OUTPUT_TITLE: &str = "PERFECT 1-SHOT PROMPT";

/// Sections are separated by exactly one blank line; no trailing newline.
const PROMPT_TEMPLATE: &str = r#"You are an elite product + engineering execution assistant.

## Project Summary

{summary}

## Clarified Requirements

{requirements}

## Your Task

Produce the best possible solution for this request in one response.

### Must Do

1. Restate the objective and constraints in a compact spec.

2. Propose an execution plan optimized for speed and quality.

3. Deliver the requested output in the required format.

4. Address edge cases, risks, and trade-offs explicitly.

5. Include validation steps/tests against the quality bar.

6. Respect non-goals and avoid unnecessary scope expansion.

### Output Requirements

- Be concrete and implementation-ready.

- Use assumptions only when unavoidable, and label them clearly.

- If information is missing, provide a "best default" and explain why.

- Keep the response efficient, high-signal, and free of fluff."#;

/// One `- <key>: <value>` line per answer, in answer-set order.
pub fn requirement_lines(answers: &AnswerSet) -> String {
    answers
        .iter()
        .map(|(key, value)| format!("- {}: {}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compose the prompt document from a normalized summary and answer set.
///
/// The result depends only on its inputs: the same summary and answers
/// always produce byte-identical output.
pub fn compose_prompt(summary: &str, answers: &AnswerSet) -> Result<String> {
    let requirements = requirement_lines(answers);
    let variables = vars([("summary", summary), ("requirements", requirements.as_str())]);
    Ok(render_template(PROMPT_TEMPLATE, &variables)?)
}

/// Frame a composed prompt with the banner and title for printing.
pub fn render_output(prompt: &str, banner_width: usize) -> String {
    let banner = "=".repeat(banner_width);
    format!("\n{banner}\n{OUTPUT_TITLE}\n{banner}\n{prompt}\n")
}
