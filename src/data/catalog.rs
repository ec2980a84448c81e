//! Sources of themes and quiz files.
//!
//! The parser never touches the file system; it receives already-decoded
//! line sequences through this interface. That keeps the core testable
//! with in-memory strings and leaves scoped file handling in one place.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Supplies theme names, per-theme quiz identifiers, and quiz file lines.
pub trait QuizCatalog {
    /// Available theme names, sorted.
    fn themes(&self) -> Vec<String>;

    /// Quiz file identifiers belonging to a theme, sorted.
    fn quizzes(&self, theme: &str) -> Vec<String>;

    /// Full decoded line sequence of one quiz file, trailing line
    /// terminators stripped.
    fn read_lines(&self, theme: &str, quiz: &str) -> io::Result<Vec<String>>;
}

/// Catalog over a directory tree: each subdirectory of the root is a theme
/// and each `*.txt` file inside it is a quiz.
pub struct FsCatalog {
    root: PathBuf,
}

impl FsCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

impl QuizCatalog for FsCatalog {
    fn themes(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.root) else {
            return Vec::new();
        };

        let mut themes: Vec<String> = entries
            .flatten()
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        themes.sort();
        themes
    }

    fn quizzes(&self, theme: &str) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.root.join(theme)) else {
            return Vec::new();
        };

        let mut quizzes: Vec<String> = entries
            .flatten()
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
            })
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        quizzes.sort();
        quizzes
    }

    fn read_lines(&self, theme: &str, quiz: &str) -> io::Result<Vec<String>> {
        let text = fs::read_to_string(self.root.join(theme).join(quiz))?;
        Ok(text.lines().map(str::to_string).collect())
    }
}

/// In-memory catalog, mainly for tests and embedding.
#[derive(Default)]
pub struct MemoryCatalog {
    themes: Vec<(String, Vec<(String, String)>)>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quiz file under a theme, creating the theme if needed.
    pub fn with_quiz(mut self, theme: &str, quiz: &str, text: &str) -> Self {
        let index = match self.themes.iter().position(|(name, _)| name == theme) {
            Some(index) => index,
            None => {
                self.themes.push((theme.to_string(), Vec::new()));
                self.themes.len() - 1
            }
        };
        self.themes[index].1.push((quiz.to_string(), text.to_string()));
        self
    }
}

impl QuizCatalog for MemoryCatalog {
    fn themes(&self) -> Vec<String> {
        let mut themes: Vec<String> = self.themes.iter().map(|(name, _)| name.clone()).collect();
        themes.sort();
        themes
    }

    fn quizzes(&self, theme: &str) -> Vec<String> {
        let Some((_, files)) = self.themes.iter().find(|(name, _)| name == theme) else {
            return Vec::new();
        };
        let mut quizzes: Vec<String> = files.iter().map(|(name, _)| name.clone()).collect();
        quizzes.sort();
        quizzes
    }

    fn read_lines(&self, theme: &str, quiz: &str) -> io::Result<Vec<String>> {
        self.themes
            .iter()
            .find(|(name, _)| name == theme)
            .and_then(|(_, files)| files.iter().find(|(name, _)| name == quiz))
            .map(|(_, text)| text.lines().map(str::to_string).collect())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no quiz {quiz:?} in theme {theme:?}"),
                )
            })
    }
}
