//! Data model shared across the application.

mod quiz;
mod state;

pub use quiz::{Answer, Question, Quiz, ResultBand};
pub use state::AppState;
