//! Implementation of the question-and-compose pipeline.

use crate::answers::{AnswerSet, AnswerSource, BatchSource, InteractiveSource};
use crate::config::Config;
use crate::error::{OneshotError, Result};
use crate::prompt::{compose_prompt, render_output};
use crate::questions::{Question, resolve_questions};
use crate::text::normalize;
use std::io::{BufRead, Write};

/// Generate a prompt for `summary` and write it to `writer`.
///
/// With `answers_json`, answers come from the payload and nothing is read
/// from `reader`. Without it, every question is asked on `writer` and
/// answered from `reader`.
///
/// # Errors
///
/// * `OneshotError::EmptySummary` - the summary is blank; nothing is asked or printed
/// * `OneshotError::MalformedPayload` - the payload is not a JSON object; nothing is printed
/// * `OneshotError::Io` - reading answers or writing output failed
pub fn cmd_generate<R: BufRead, W: Write>(
    summary: &str,
    answers_json: Option<&str>,
    config: &Config,
    reader: R,
    mut writer: W,
) -> Result<()> {
    let summary = normalize(summary);
    if summary.is_empty() {
        return Err(OneshotError::EmptySummary);
    }

    let questions = resolve_questions(&summary);
    log::info!("resolved {} question(s)", questions.len());

    let answers = collect_answers(&questions, answers_json, config, reader, &mut writer)?;
    let prompt = compose_prompt(&summary, &answers)?;

    writer.write_all(render_output(&prompt, config.banner_width).as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn collect_answers<R: BufRead, W: Write>(
    questions: &[&Question],
    answers_json: Option<&str>,
    config: &Config,
    reader: R,
    writer: W,
) -> Result<AnswerSet> {
    match answers_json {
        Some(payload) => {
            log::info!("using pre-supplied answers");
            BatchSource::parse(payload)?
                .default_answer(&config.default_answer)
                .collect(questions)
        }
        None => InteractiveSource::new(reader, writer)
            .default_answer(&config.default_answer)
            .show_intro(config.show_intro)
            .collect(questions),
    }
}
