use std::fmt;
use std::io;

use crate::data::QuizCatalog;
use crate::models::Quiz;
use crate::parser::{self, ParseError};

/// Error loading a quiz through a catalog.
#[derive(Debug)]
pub enum LoadError {
    /// The catalog could not produce the file's lines.
    Io(io::Error),
    /// The file's content did not follow the quiz format.
    Parse(ParseError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read quiz file: {}", e),
            LoadError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<ParseError> for LoadError {
    fn from(err: ParseError) -> Self {
        LoadError::Parse(err)
    }
}

/// Read and parse one quiz file from the catalog.
pub fn load_quiz(catalog: &dyn QuizCatalog, theme: &str, quiz: &str) -> Result<Quiz, LoadError> {
    let lines = catalog.read_lines(theme, quiz)?;
    Ok(parser::parse(&lines)?)
}

/// Display title for a quiz file in the test list.
///
/// The file's first line, trimmed. Falls back to the file identifier when
/// the file is unreadable or its first line is blank.
pub fn quiz_title(catalog: &dyn QuizCatalog, theme: &str, quiz: &str) -> String {
    let title = catalog
        .read_lines(theme, quiz)
        .ok()
        .and_then(|lines| lines.first().map(|line| line.trim().to_string()))
        .unwrap_or_default();

    if title.is_empty() {
        quiz.to_string()
    } else {
        title
    }
}
