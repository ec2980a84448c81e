//! Quiz data model.
//!
//! All four entities are immutable value records built once by the parser
//! and owned by the caller for the duration of one quiz session.

/// A titled collection of questions and scoring bands parsed from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub title: String,
    pub questions: Vec<Question>,
    pub result_bands: Vec<ResultBand>,
}

/// A prompt with an ordered list of scored answer choices.
///
/// Answer order is presentation order. An empty answer list is
/// structurally valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub answers: Vec<Answer>,
}

/// One selectable choice carrying a point value.
///
/// Points may be negative, zero, or positive; no bound is enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub points: i32,
}

/// A scored-range-to-text mapping used to interpret a quiz's final score.
///
/// Nothing is enforced between bands: overlapping or gapped ranges are
/// accepted silently and file order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBand {
    pub min_score: i32,
    pub max_score: i32,
    pub text: String,
}

impl ResultBand {
    /// Whether `score` falls inside this band (inclusive on both ends).
    pub fn contains(&self, score: i32) -> bool {
        self.min_score <= score && score <= self.max_score
    }
}

impl Quiz {
    /// Look up the band matching a total score.
    ///
    /// Selection policy: the first band in file order whose range contains
    /// the score wins. Returns `None` when no band matches (gapped ranges,
    /// or a quiz with no results section).
    pub fn result_for_score(&self, score: i32) -> Option<&ResultBand> {
        self.result_bands.iter().find(|band| band.contains(score))
    }

    /// Highest total score reachable by always picking the best answer.
    ///
    /// Questions without answers contribute nothing.
    pub fn max_score(&self) -> i32 {
        self.questions
            .iter()
            .filter_map(|q| q.answers.iter().map(|a| a.points).max())
            .sum()
    }

    /// Serialize back to the line-oriented text format the parser reads.
    ///
    /// Reparsing the output yields an equal `Quiz`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');

        for question in &self.questions {
            out.push('\n');
            out.push_str(&question.text);
            out.push('\n');
            for answer in &question.answers {
                out.push_str(&format!("{};{}\n", answer.text, answer.points));
            }
        }

        if !self.result_bands.is_empty() {
            out.push_str("\n---RESULTS---\n");
            for band in &self.result_bands {
                out.push_str(&format!(
                    "{};{};{}\n",
                    band.min_score, band.max_score, band.text
                ));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands(ranges: &[(i32, i32, &str)]) -> Vec<ResultBand> {
        ranges
            .iter()
            .map(|&(min_score, max_score, text)| ResultBand {
                min_score,
                max_score,
                text: text.to_string(),
            })
            .collect()
    }

    #[test]
    fn first_band_in_file_order_wins_on_overlap() {
        let quiz = Quiz {
            title: "T".to_string(),
            questions: vec![],
            result_bands: bands(&[(0, 10, "first"), (5, 10, "second")]),
        };

        assert_eq!(quiz.result_for_score(7).unwrap().text, "first");
    }

    #[test]
    fn gapped_ranges_yield_no_band() {
        let quiz = Quiz {
            title: "T".to_string(),
            questions: vec![],
            result_bands: bands(&[(0, 3, "low"), (10, 20, "high")]),
        };

        assert!(quiz.result_for_score(5).is_none());
        assert_eq!(quiz.result_for_score(3).unwrap().text, "low");
        assert_eq!(quiz.result_for_score(10).unwrap().text, "high");
    }

    #[test]
    fn no_bands_means_no_result() {
        let quiz = Quiz {
            title: "T".to_string(),
            questions: vec![],
            result_bands: vec![],
        };

        assert!(quiz.result_for_score(0).is_none());
    }

    #[test]
    fn band_range_is_inclusive() {
        let band = ResultBand {
            min_score: -2,
            max_score: 2,
            text: "mid".to_string(),
        };

        assert!(band.contains(-2));
        assert!(band.contains(2));
        assert!(!band.contains(3));
        assert!(!band.contains(-3));
    }

    #[test]
    fn max_score_picks_best_answer_per_question() {
        let quiz = Quiz {
            title: "T".to_string(),
            questions: vec![
                Question {
                    text: "Q1".to_string(),
                    answers: vec![
                        Answer {
                            text: "a".to_string(),
                            points: 1,
                        },
                        Answer {
                            text: "b".to_string(),
                            points: 3,
                        },
                    ],
                },
                Question {
                    text: "Q2".to_string(),
                    answers: vec![Answer {
                        text: "penalty".to_string(),
                        points: -5,
                    }],
                },
                Question {
                    text: "no answers".to_string(),
                    answers: vec![],
                },
            ],
            result_bands: vec![],
        };

        assert_eq!(quiz.max_score(), -2);
    }
}
