use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

use quiz_core::model::{OptionLetter, QuestionRecord};
use quiz_core::{ScoreReport, score};

use super::progress::QuizProgress;
use crate::error::QuizError;

/// One sampled quiz attempt.
///
/// Questions are shared with the bank; answers are committed strictly in order, so
/// `answers()[i]` always belongs to `questions()[i]` and `answers().len()` equals the
/// current index.
#[derive(Clone, PartialEq)]
pub struct QuizSession {
    questions: Vec<Arc<QuestionRecord>>,
    current: usize,
    answers: Vec<OptionLetter>,
    selected: Option<OptionLetter>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// # Errors
    ///
    /// Returns `QuizError::EmptyBank` if no questions are provided.
    pub fn new(
        questions: Vec<Arc<QuestionRecord>>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }

        Ok(Self {
            answers: Vec::with_capacity(questions.len()),
            questions,
            current: 0,
            selected: None,
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Arc<QuestionRecord>] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn answers(&self) -> &[OptionLetter] {
        &self.answers
    }

    #[must_use]
    pub fn selected(&self) -> Option<OptionLetter> {
        self.selected
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.current).map(|question| &**question)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.len(),
            answered: self.answers.len(),
            remaining: self.len().saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }

    pub(crate) fn select(&mut self, letter: OptionLetter) {
        self.selected = Some(letter);
    }

    /// Commits the pending selection and moves to the next question.
    ///
    /// Returns the committed letter, or `None` when nothing was selected or the session is
    /// already complete.
    pub(crate) fn commit(&mut self, at: DateTime<Utc>) -> Option<OptionLetter> {
        if self.is_complete() {
            return None;
        }
        let letter = self.selected.take()?;
        self.answers.push(letter);
        self.current += 1;
        if self.is_complete() {
            self.completed_at = Some(at);
        }
        Some(letter)
    }

    /// # Errors
    ///
    /// Returns `QuizError::DivisionByZeroGuard` if the session has no questions.
    pub fn score(&self) -> Result<ScoreReport, QuizError> {
        Ok(score(&self.questions, &self.answers)?)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers", &self.answers)
            .field("selected", &self.selected)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}
