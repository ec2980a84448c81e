use crate::data::{load_quiz, quiz_title, QuizCatalog};
use crate::models::{AppState, Question, Quiz};

/// Which list has keyboard focus on the browse screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseFocus {
    Themes,
    Tests,
}

/// One entry of the test list: the file identifier plus the display title
/// taken from the file's first line.
pub struct TestEntry {
    pub file: String,
    pub title: String,
}

/// Session state for one run of the application.
///
/// Owns the catalog and the quiz currently loaded from it. The parser and
/// model stay free of any of this bookkeeping.
pub struct App {
    pub state: AppState,
    catalog: Box<dyn QuizCatalog>,
    themes: Vec<String>,
    selected_theme: usize,
    tests: Vec<TestEntry>,
    selected_test: usize,
    focus: BrowseFocus,
    load_error: Option<String>,
    quiz: Option<Quiz>,
    current_question: usize,
    selected_answer: usize,
    picks: Vec<Option<usize>>,
}

impl App {
    pub fn new(catalog: Box<dyn QuizCatalog>) -> Self {
        let themes = catalog.themes();
        let mut app = Self {
            state: AppState::Browse,
            catalog,
            themes,
            selected_theme: 0,
            tests: Vec::new(),
            selected_test: 0,
            focus: BrowseFocus::Themes,
            load_error: None,
            quiz: None,
            current_question: 0,
            selected_answer: 0,
            picks: Vec::new(),
        };
        app.refresh_tests();
        app
    }

    // --- browse screen ---

    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    pub fn selected_theme(&self) -> usize {
        self.selected_theme
    }

    pub fn tests(&self) -> &[TestEntry] {
        &self.tests
    }

    pub fn selected_test(&self) -> usize {
        self.selected_test
    }

    pub fn focus(&self) -> BrowseFocus {
        self.focus
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Whether a test is loaded and ready to start.
    pub fn can_start(&self) -> bool {
        self.quiz.is_some()
    }

    pub fn select_next_theme(&mut self) {
        if self.themes.is_empty() {
            return;
        }
        self.selected_theme = (self.selected_theme + 1) % self.themes.len();
        self.refresh_tests();
    }

    pub fn select_previous_theme(&mut self) {
        if self.themes.is_empty() {
            return;
        }
        self.selected_theme = (self.selected_theme + self.themes.len() - 1) % self.themes.len();
        self.refresh_tests();
    }

    pub fn select_next_test(&mut self) {
        if self.tests.is_empty() {
            return;
        }
        self.selected_test = (self.selected_test + 1) % self.tests.len();
        self.load_selected_test();
    }

    pub fn select_previous_test(&mut self) {
        if self.tests.is_empty() {
            return;
        }
        self.selected_test = (self.selected_test + self.tests.len() - 1) % self.tests.len();
        self.load_selected_test();
    }

    /// Move focus to the test list and load the highlighted test.
    pub fn focus_tests(&mut self) {
        if self.tests.is_empty() {
            return;
        }
        self.focus = BrowseFocus::Tests;
        if self.quiz.is_none() && self.load_error.is_none() {
            self.load_selected_test();
        }
    }

    pub fn focus_themes(&mut self) {
        self.focus = BrowseFocus::Themes;
    }

    /// Changing the theme invalidates the test list and any loaded quiz.
    fn refresh_tests(&mut self) {
        self.tests.clear();
        self.selected_test = 0;
        self.quiz = None;
        self.load_error = None;

        let Some(theme) = self.themes.get(self.selected_theme) else {
            return;
        };
        self.tests = self
            .catalog
            .quizzes(theme)
            .into_iter()
            .map(|file| {
                let title = quiz_title(self.catalog.as_ref(), theme, &file);
                TestEntry { file, title }
            })
            .collect();
    }

    fn load_selected_test(&mut self) {
        self.quiz = None;
        self.load_error = None;

        let (Some(theme), Some(test)) = (
            self.themes.get(self.selected_theme),
            self.tests.get(self.selected_test),
        ) else {
            return;
        };

        match load_quiz(self.catalog.as_ref(), theme, &test.file) {
            Ok(quiz) => self.quiz = Some(quiz),
            Err(err) => self.load_error = Some(err.to_string()),
        }
    }

    // --- quiz screen ---

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz
            .as_ref()
            .and_then(|quiz| quiz.questions.get(self.current_question))
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question + 1
    }

    pub fn total_questions(&self) -> usize {
        self.quiz.as_ref().map_or(0, |quiz| quiz.questions.len())
    }

    pub fn selected_answer(&self) -> usize {
        self.selected_answer
    }

    pub fn picks(&self) -> &[Option<usize>] {
        &self.picks
    }

    /// Start the loaded quiz. Does nothing while no test parsed cleanly.
    pub fn start_quiz(&mut self) {
        let Some(quiz) = self.quiz.as_ref() else {
            return;
        };
        self.picks = vec![None; quiz.questions.len()];
        self.current_question = 0;
        self.selected_answer = 0;
        self.state = AppState::Quiz;
        self.skip_answerless_questions();
    }

    pub fn select_next_answer(&mut self) {
        let Some(count) = self.current_answer_count() else {
            return;
        };
        self.selected_answer = (self.selected_answer + 1) % count;
    }

    pub fn select_previous_answer(&mut self) {
        let Some(count) = self.current_answer_count() else {
            return;
        };
        self.selected_answer = (self.selected_answer + count - 1) % count;
    }

    pub fn submit_answer(&mut self) {
        if self.current_question < self.picks.len() {
            self.picks[self.current_question] = Some(self.selected_answer);
        }
        self.current_question += 1;
        self.selected_answer = 0;
        self.skip_answerless_questions();
    }

    /// Questions without answers offer nothing to pick; pass over them.
    fn skip_answerless_questions(&mut self) {
        while let Some(question) = self.current_question() {
            if !question.answers.is_empty() {
                return;
            }
            self.current_question += 1;
        }
        self.state = AppState::Result;
    }

    fn current_answer_count(&self) -> Option<usize> {
        let count = self.current_question()?.answers.len();
        (count > 0).then_some(count)
    }

    // --- result screen ---

    /// Accumulated points of all chosen answers.
    pub fn total_score(&self) -> i32 {
        let Some(quiz) = self.quiz.as_ref() else {
            return 0;
        };
        self.picks
            .iter()
            .zip(quiz.questions.iter())
            .filter_map(|(pick, question)| {
                pick.and_then(|index| question.answers.get(index))
                    .map(|answer| answer.points)
            })
            .sum()
    }

    /// Text of the first result band containing the total score.
    pub fn result_text(&self) -> Option<&str> {
        self.quiz
            .as_ref()?
            .result_for_score(self.total_score())
            .map(|band| band.text.as_str())
    }

    /// Back to browsing, selections intact.
    pub fn restart(&mut self) {
        self.state = AppState::Browse;
        self.current_question = 0;
        self.selected_answer = 0;
        self.picks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryCatalog;

    fn sample_app() -> App {
        let catalog = MemoryCatalog::new()
            .with_quiz(
                "mood",
                "day.txt",
                "How was your day?\n\
                 Morning?\n\
                 Great;2\n\
                 Fine;1\n\
                 Awful;-1\n\
                 \n\
                 Evening?\n\
                 Great;2\n\
                 Awful;-1\n\
                 \n\
                 ---RESULTS---\n\
                 -2;0;Rough\n\
                 1;4;Decent\n",
            )
            .with_quiz("mood", "broken.txt", "Broken\nQ?\nno delimiter\n")
            .with_quiz("trivia", "rome.txt", "Rome\nCapital?\nRome;1\nParis;0\n");
        App::new(Box::new(catalog))
    }

    #[test]
    fn browse_lists_themes_and_test_titles() {
        let app = sample_app();
        assert_eq!(app.state, AppState::Browse);
        assert_eq!(app.themes(), ["mood", "trivia"]);
        assert_eq!(app.tests()[0].file, "broken.txt");
        assert_eq!(app.tests()[0].title, "Broken");
        assert_eq!(app.tests()[1].title, "How was your day?");
    }

    #[test]
    fn switching_theme_refreshes_tests_and_clears_quiz() {
        let mut app = sample_app();
        app.focus_tests();
        app.select_next_test();
        assert!(app.can_start());

        app.focus_themes();
        app.select_next_theme();
        assert!(!app.can_start());
        assert_eq!(app.tests().len(), 1);
        assert_eq!(app.tests()[0].title, "Rome");
    }

    #[test]
    fn malformed_test_records_error_and_blocks_start() {
        let mut app = sample_app();
        app.focus_tests();
        assert!(!app.can_start());
        let error = app.load_error().unwrap();
        assert!(error.contains("line 3"), "unexpected error: {error}");

        app.start_quiz();
        assert_eq!(app.state, AppState::Browse);
    }

    #[test]
    fn full_run_accumulates_points_and_finds_band() {
        let mut app = sample_app();
        app.focus_tests();
        app.select_next_test();
        assert!(app.can_start());

        app.start_quiz();
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.total_questions(), 2);

        // Morning: pick "Fine" (1 point).
        app.select_next_answer();
        app.submit_answer();
        // Evening: pick "Awful" (-1 point).
        app.select_next_answer();
        app.submit_answer();

        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.total_score(), 0);
        assert_eq!(app.result_text(), Some("Rough"));
    }

    #[test]
    fn answer_navigation_wraps() {
        let mut app = sample_app();
        app.focus_tests();
        app.select_next_test();
        app.start_quiz();

        app.select_previous_answer();
        assert_eq!(app.selected_answer(), 2);
        app.select_next_answer();
        assert_eq!(app.selected_answer(), 0);
    }

    #[test]
    fn answerless_questions_are_skipped() {
        let catalog = MemoryCatalog::new().with_quiz(
            "t",
            "q.txt",
            "Title\nNo choices here\n\nReal question?\nYes;1\n",
        );
        let mut app = App::new(Box::new(catalog));
        app.focus_tests();
        app.start_quiz();

        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.current_question_number(), 2);

        app.submit_answer();
        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.picks(), [None, Some(0)]);
        assert_eq!(app.total_score(), 1);
    }

    #[test]
    fn quiz_without_questions_goes_straight_to_result() {
        let catalog = MemoryCatalog::new().with_quiz("t", "q.txt", "Only a title\n");
        let mut app = App::new(Box::new(catalog));
        app.focus_tests();
        app.start_quiz();

        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.total_score(), 0);
        assert_eq!(app.result_text(), None);
    }

    #[test]
    fn restart_returns_to_browse_with_quiz_still_loaded() {
        let mut app = sample_app();
        app.focus_tests();
        app.select_next_test();
        app.start_quiz();
        app.submit_answer();
        app.submit_answer();

        app.restart();
        assert_eq!(app.state, AppState::Browse);
        assert!(app.can_start());
        assert!(app.picks().is_empty());
    }

    #[test]
    fn empty_catalog_is_harmless() {
        let mut app = App::new(Box::new(MemoryCatalog::new()));
        assert!(app.themes().is_empty());
        app.select_next_theme();
        app.focus_tests();
        app.start_quiz();
        assert_eq!(app.state, AppState::Browse);
    }
}
