//! Quiz flow: access-code unlock, per-run answer state, countdown, scoring.

use crate::catalog::{Catalog, OptionId, Quiz, QuizQuestion};
use thiserror::Error;

/// Default time budget per question, in seconds. A run's countdown starts at
/// this times the question count.
pub const DEFAULT_SECONDS_PER_QUESTION: u32 = 30;

/// Errors from quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Kode akses tidak dikenali: {0}")]
    UnknownAccessCode(String),

    #[error("Pilih salah satu jawaban dulu")]
    NoSelection,

    #[error("Pertanyaan ini sudah dijawab")]
    AlreadyAnswered,

    #[error("Kuis sudah selesai")]
    Finished,

    #[error("Pilihan {0} tidak ada pada pertanyaan ini")]
    UnknownOption(OptionId),
}

/// Resolve an access code to its quiz.
///
/// Unknown codes produce a validation error for inline display; nothing
/// else happens (no navigation, no state change).
pub fn unlock_quiz<'a>(catalog: &'a Catalog, code: &str) -> Result<&'a Quiz, QuizError> {
    catalog
        .coded_quiz(code)
        .ok_or_else(|| QuizError::UnknownAccessCode(code.trim().to_string()))
}

/// Whether a run is still accepting answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    InProgress,
    Finished,
}

/// Per-question answer bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct Answer {
    pub selected: Option<OptionId>,
    /// Set once the answer has been checked; locks the question.
    pub checked: bool,
    pub correct: bool,
}

/// Final score of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    pub percent: u32,
}

impl QuizScore {
    /// Display label for the score band.
    pub fn grade(&self) -> &'static str {
        match self.percent {
            90..=100 => "Luar Biasa",
            70..=89 => "Baik",
            50..=69 => "Cukup",
            _ => "Perlu Belajar Lagi",
        }
    }
}

/// One attempt at a quiz.
///
/// The flow per question is select, check (locks the question and reveals
/// the explanation), advance. The countdown runs on whole seconds; when it
/// reaches zero the run finishes with whatever has been answered so far.
#[derive(Debug, Clone)]
pub struct QuizRun {
    quiz: Quiz,
    current: usize,
    answers: Vec<Answer>,
    remaining_seconds: u32,
    state: RunState,
}

impl QuizRun {
    /// Start a run with the default time budget.
    pub fn new(quiz: Quiz) -> Self {
        Self::with_seconds_per_question(quiz, DEFAULT_SECONDS_PER_QUESTION)
    }

    /// Start a run with a custom per-question time budget.
    pub fn with_seconds_per_question(quiz: Quiz, seconds_per_question: u32) -> Self {
        let answers = vec![Answer::default(); quiz.questions.len()];
        let remaining_seconds = seconds_per_question * quiz.questions.len() as u32;
        Self {
            quiz,
            current: 0,
            answers,
            remaining_seconds,
            state: RunState::InProgress,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.quiz.questions[self.current]
    }

    pub fn current_answer(&self) -> &Answer {
        &self.answers[self.current]
    }

    pub fn answer(&self, index: usize) -> Option<&Answer> {
        self.answers.get(index)
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.quiz.questions.len()
    }

    /// (checked, total) progress counts.
    pub fn progress(&self) -> (usize, usize) {
        let checked = self.answers.iter().filter(|a| a.checked).count();
        (checked, self.quiz.questions.len())
    }

    /// Select an option on the current question.
    pub fn select(&mut self, option: OptionId) -> Result<(), QuizError> {
        if self.state == RunState::Finished {
            return Err(QuizError::Finished);
        }
        if self.answers[self.current].checked {
            return Err(QuizError::AlreadyAnswered);
        }
        if self.current_question().option(option).is_none() {
            return Err(QuizError::UnknownOption(option));
        }
        self.answers[self.current].selected = Some(option);
        Ok(())
    }

    /// Check the selected option. Locks the question and returns whether
    /// the selection was correct; the screen reveals the explanation.
    pub fn check(&mut self) -> Result<bool, QuizError> {
        if self.state == RunState::Finished {
            return Err(QuizError::Finished);
        }
        let answer = &mut self.answers[self.current];
        if answer.checked {
            return Err(QuizError::AlreadyAnswered);
        }
        let selected = answer.selected.ok_or(QuizError::NoSelection)?;

        let correct = self.quiz.questions[self.current]
            .option(selected)
            .map(|o| o.is_correct)
            .unwrap_or(false);

        let answer = &mut self.answers[self.current];
        answer.checked = true;
        answer.correct = correct;
        Ok(correct)
    }

    /// Move to the next question, or finish after the last one.
    pub fn advance(&mut self) -> RunState {
        if self.state == RunState::Finished {
            return self.state;
        }
        if self.is_last_question() {
            self.state = RunState::Finished;
        } else {
            self.current += 1;
        }
        self.state
    }

    /// One countdown tick. No-op once the run has finished.
    pub fn tick_second(&mut self) {
        if self.state == RunState::Finished {
            return;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.state = RunState::Finished;
        }
    }

    pub fn score(&self) -> QuizScore {
        let total = self.quiz.questions.len();
        let correct = self.answers.iter().filter(|a| a.correct).count();
        let percent = if total == 0 {
            0
        } else {
            (correct * 100 / total) as u32
        };
        QuizScore {
            correct,
            total,
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Quiz, QuizOption, QuizQuestion};

    fn two_question_quiz() -> Quiz {
        Quiz::new(1, "Uji", "kuis uji", "❓").with_questions(vec![
            QuizQuestion::new(1, "Satu?", "karena satu").with_options(vec![
                QuizOption::correct(1, "benar"),
                QuizOption::incorrect(2, "salah"),
            ]),
            QuizQuestion::new(2, "Dua?", "karena dua").with_options(vec![
                QuizOption::incorrect(1, "salah"),
                QuizOption::correct(2, "benar"),
            ]),
        ])
    }

    #[test]
    fn full_run_scores_correctly() {
        let mut run = QuizRun::new(two_question_quiz());

        run.select(OptionId(1)).unwrap();
        assert!(run.check().unwrap());
        assert_eq!(run.advance(), RunState::InProgress);

        run.select(OptionId(1)).unwrap();
        assert!(!run.check().unwrap());
        assert_eq!(run.advance(), RunState::Finished);

        let score = run.score();
        assert_eq!(score.correct, 1);
        assert_eq!(score.total, 2);
        assert_eq!(score.percent, 50);
        assert_eq!(score.grade(), "Cukup");
    }

    #[test]
    fn check_without_selection_fails() {
        let mut run = QuizRun::new(two_question_quiz());
        assert!(matches!(run.check(), Err(QuizError::NoSelection)));
    }

    #[test]
    fn checked_question_is_locked() {
        let mut run = QuizRun::new(two_question_quiz());
        run.select(OptionId(2)).unwrap();
        run.check().unwrap();

        assert!(matches!(run.select(OptionId(1)), Err(QuizError::AlreadyAnswered)));
        assert!(matches!(run.check(), Err(QuizError::AlreadyAnswered)));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut run = QuizRun::new(two_question_quiz());
        assert!(matches!(
            run.select(OptionId(9)),
            Err(QuizError::UnknownOption(_))
        ));
    }

    #[test]
    fn countdown_expiry_finishes_run() {
        let mut run = QuizRun::with_seconds_per_question(two_question_quiz(), 1);
        assert_eq!(run.remaining_seconds(), 2);

        run.tick_second();
        assert_eq!(run.state(), RunState::InProgress);
        run.tick_second();
        assert_eq!(run.state(), RunState::Finished);

        // Ticks after completion are no-ops.
        run.tick_second();
        assert_eq!(run.remaining_seconds(), 0);
        assert!(matches!(run.select(OptionId(1)), Err(QuizError::Finished)));
    }

    #[test]
    fn grade_bands() {
        let score = |percent| QuizScore {
            correct: 0,
            total: 0,
            percent,
        };
        assert_eq!(score(100).grade(), "Luar Biasa");
        assert_eq!(score(75).grade(), "Baik");
        assert_eq!(score(50).grade(), "Cukup");
        assert_eq!(score(25).grade(), "Perlu Belajar Lagi");
    }
}
