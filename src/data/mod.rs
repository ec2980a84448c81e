//! Quiz sources and loading.

mod catalog;
mod loader;

pub use catalog::{FsCatalog, MemoryCatalog, QuizCatalog};
pub use loader::{load_quiz, quiz_title, LoadError};
