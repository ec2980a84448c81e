//! Line-oriented quiz file parser.
//!
//! The grammar is two-phase: a title line, then question blocks separated by
//! blank lines, then an optional results section introduced by the
//! `---RESULTS---` marker. Parsing is a pure function over already-decoded
//! lines; all file reading and UTF-8 decoding happens in the caller.

use std::fmt;

use crate::models::{Answer, Question, Quiz, ResultBand};

/// Marker line separating the question blocks from the results section.
pub const RESULTS_MARKER: &str = "---RESULTS---";

/// Structured parse failure.
///
/// Line numbers are 1-based physical line numbers into the input; `raw` is
/// the offending line exactly as given. The parser aborts on the first
/// error rather than skipping bad lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input had no lines at all.
    EmptyInput,
    /// An answer line had fewer than two `;`-separated fields, or its
    /// points field was not an integer.
    MalformedAnswerLine { line: usize, raw: String },
    /// A results line had fewer than three `;`-separated fields, or a
    /// score field was not an integer.
    MalformedResultLine { line: usize, raw: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "quiz file is empty"),
            ParseError::MalformedAnswerLine { line, raw } => {
                write!(
                    f,
                    "malformed answer on line {}: \"{}\" (expected <text>;<points>)",
                    line, raw
                )
            }
            ParseError::MalformedResultLine { line, raw } => {
                write!(
                    f,
                    "malformed result band on line {}: \"{}\" (expected <min>;<max>;<text>)",
                    line, raw
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a quiz from its decoded lines.
///
/// Pure and deterministic: identical input always yields a structurally
/// equal [`Quiz`] or the same [`ParseError`].
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Quiz, ParseError> {
    let mut cursor = lines.iter().map(AsRef::as_ref);

    let title = cursor.next().ok_or(ParseError::EmptyInput)?.trim().to_string();

    let mut questions = Vec::new();
    let mut result_bands = Vec::new();

    // Physical line number of the line about to be read, 1-based.
    let mut number = 2;
    let mut in_results = false;

    let mut pending: Option<Question> = None;

    for raw in cursor {
        let line = raw.trim();
        let current = number;
        number += 1;

        if line.is_empty() {
            // A blank line closes the answer block of the current question.
            if let Some(question) = pending.take() {
                questions.push(question);
            }
            continue;
        }

        if in_results {
            result_bands.push(parse_result_line(line, raw, current)?);
            continue;
        }

        if line == RESULTS_MARKER && pending.is_none() {
            in_results = true;
            continue;
        }

        match pending.as_mut() {
            None => {
                pending = Some(Question {
                    text: line.to_string(),
                    answers: Vec::new(),
                });
            }
            Some(question) => {
                question.answers.push(parse_answer_line(line, raw, current)?);
            }
        }
    }

    if let Some(question) = pending.take() {
        questions.push(question);
    }

    Ok(Quiz {
        title,
        questions,
        result_bands,
    })
}

/// `<text>;<points>[;ignored...]`. Extra fields are ignored, not stored.
fn parse_answer_line(line: &str, raw: &str, number: usize) -> Result<Answer, ParseError> {
    let mut fields = line.split(';');

    let (Some(text), Some(points)) = (fields.next(), fields.next()) else {
        return Err(ParseError::MalformedAnswerLine {
            line: number,
            raw: raw.to_string(),
        });
    };

    let points = points
        .trim()
        .parse::<i32>()
        .map_err(|_| ParseError::MalformedAnswerLine {
            line: number,
            raw: raw.to_string(),
        })?;

    Ok(Answer {
        text: text.trim().to_string(),
        points,
    })
}

/// `<min>;<max>;<text>[;ignored...]`.
fn parse_result_line(line: &str, raw: &str, number: usize) -> Result<ResultBand, ParseError> {
    let malformed = || ParseError::MalformedResultLine {
        line: number,
        raw: raw.to_string(),
    };

    let mut fields = line.split(';');

    let (Some(min), Some(max), Some(text)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(malformed());
    };

    let min_score = min.trim().parse::<i32>().map_err(|_| malformed())?;
    let max_score = max.trim().parse::<i32>().map_err(|_| malformed())?;

    Ok(ResultBand {
        min_score,
        max_score,
        text: text.trim().to_string(),
    })
}
