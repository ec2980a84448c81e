//! # textquiz
//!
//! A terminal application for taking themed quizzes stored in a simple
//! line-oriented text format: a title line, question blocks of
//! `answer;points` lines separated by blanks, and an optional
//! `---RESULTS---` section mapping score ranges to result texts.
//!
//! The parser and data model are pure and usable on their own:
//!
//! ```rust
//! use textquiz::parser;
//!
//! let lines = ["Sample", "Q1?", "A;1", "B;2"];
//! let quiz = parser::parse(&lines)?;
//! assert_eq!(quiz.title, "Sample");
//! # Ok::<(), textquiz::ParseError>(())
//! ```
//!
//! Running the full application scans a themes directory and drives the
//! terminal UI:
//!
//! ```rust,no_run
//! textquiz::run("tests-dir")?;
//! # Ok::<(), textquiz::QuizError>(())
//! ```

mod app;
mod data;
mod models;
pub mod parser;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, BrowseFocus, TestEntry};
pub use data::{load_quiz, quiz_title, FsCatalog, LoadError, MemoryCatalog, QuizCatalog};
pub use models::{Answer, AppState, Question, Quiz, ResultBand};
pub use parser::ParseError;

/// Error type for running the application.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading a quiz file.
    Load(LoadError),
    /// IO error during UI execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load quiz: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// Run the application over a themes directory.
///
/// Each subdirectory of `tests_dir` is a theme and each `*.txt` file in it
/// is a quiz. Takes over the terminal until the user quits.
pub fn run<P: AsRef<Path>>(tests_dir: P) -> Result<(), QuizError> {
    run_with_catalog(Box::new(FsCatalog::new(tests_dir.as_ref())))
}

/// Run the application over any quiz source.
pub fn run_with_catalog(catalog: Box<dyn QuizCatalog>) -> Result<(), QuizError> {
    let mut app = App::new(catalog);
    let mut term = terminal::init()?;
    let result = run_event_loop(&mut term, &mut app);
    terminal::restore()?;
    result
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Browse => handle_browse_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_browse_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Tab => {
            match app.focus() {
                BrowseFocus::Themes => app.focus_tests(),
                BrowseFocus::Tests => app.focus_themes(),
            }
            false
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.focus_themes();
            false
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.focus_tests();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            match app.focus() {
                BrowseFocus::Themes => app.select_next_theme(),
                BrowseFocus::Tests => app.select_next_test(),
            }
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            match app.focus() {
                BrowseFocus::Themes => app.select_previous_theme(),
                BrowseFocus::Tests => app.select_previous_test(),
            }
            false
        }
        KeyCode::Enter => {
            match app.focus() {
                BrowseFocus::Themes => app.focus_tests(),
                BrowseFocus::Tests => app.start_quiz(),
            }
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_answer();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_answer();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
