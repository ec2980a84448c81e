/// Which screen the application is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Browsing themes and tests.
    Browse,
    /// Answering questions of the loaded quiz.
    Quiz,
    /// Viewing the final score and its result band.
    Result,
}
