//! Terminal question-and-answer loop.

use super::{AnswerSet, AnswerSource, resolve_answer};
use crate::config::DEFAULT_ANSWER;
use crate::error::Result;
use crate::questions::Question;
use std::io::{BufRead, Write};

const INTRO: &str =
    "I will ask targeted questions to sharpen your brief before generating a one-shot prompt.";

/// Asks each question on `writer` and reads one line per answer from `reader`.
///
/// Questions are asked strictly in order; a blank line or end of input
/// records the default answer and moves on.
pub struct InteractiveSource<R, W> {
    reader: R,
    writer: W,
    default_answer: String,
    show_intro: bool,
}

impl<R: BufRead, W: Write> InteractiveSource<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            default_answer: DEFAULT_ANSWER.to_string(),
            show_intro: true,
        }
    }

    /// Override the text recorded for blank answers.
    pub fn default_answer(mut self, default_answer: impl Into<String>) -> Self {
        self.default_answer = default_answer.into();
        self
    }

    /// Toggle the introduction line printed before the first question.
    pub fn show_intro(mut self, show_intro: bool) -> Self {
        self.show_intro = show_intro;
        self
    }

    /// Give back the writer, e.g. to inspect captured output in tests.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ask(&mut self, question: &Question) -> Result<String> {
        writeln!(self.writer)?;
        writeln!(self.writer, "• {}", question.prompt)?;
        writeln!(self.writer, "  Hint: {}", question.hint)?;
        write!(self.writer, "  Answer: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            // Keep the transcript tidy when input ends mid-questionnaire.
            writeln!(self.writer)?;
            log::debug!("end of input while asking '{}'", question.key);
        }

        Ok(resolve_answer(Some(&line), &self.default_answer))
    }
}

impl<R: BufRead, W: Write> AnswerSource for InteractiveSource<R, W> {
    fn collect(&mut self, questions: &[&Question]) -> Result<AnswerSet> {
        if self.show_intro {
            writeln!(self.writer, "{}", INTRO)?;
        }

        let mut answers = AnswerSet::new();
        for question in questions {
            let answer = self.ask(question)?;
            answers.insert(question.key, answer);
        }

        Ok(answers)
    }
}
