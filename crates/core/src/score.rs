use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{OptionLetter, QuestionId, QuestionRecord};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("cannot score a session without questions")]
    EmptySession,
}

/// Qualitative feedback bucket derived from the score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackTier {
    /// 100%.
    Perfect,
    /// [80, 100).
    Good,
    /// [60, 80).
    Pass,
    /// [0, 60).
    NeedsImprovement,
}

impl FeedbackTier {
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Perfect
        } else if percentage >= 80.0 {
            Self::Good
        } else if percentage >= 60.0 {
            Self::Pass
        } else {
            Self::NeedsImprovement
        }
    }

    /// Stable machine-readable name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Good => "good",
            Self::Pass => "pass",
            Self::NeedsImprovement => "needs-improvement",
        }
    }
}

/// How one question was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub question_id: QuestionId,
    pub chosen: Option<OptionLetter>,
    pub correct: OptionLetter,
}

impl QuestionOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.chosen == Some(self.correct)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub score: u32,
    pub total: u32,
    pub percentage: f64,
    pub tier: FeedbackTier,
    pub outcomes: Vec<QuestionOutcome>,
}

/// Scores committed answers against the session's questions.
///
/// `answers[i]` belongs to `questions[i]`; a question without an answer counts as wrong.
///
/// # Errors
///
/// Returns `ScoreError::EmptySession` if `questions` is empty.
pub fn score(
    questions: &[Arc<QuestionRecord>],
    answers: &[OptionLetter],
) -> Result<ScoreReport, ScoreError> {
    if questions.is_empty() {
        return Err(ScoreError::EmptySession);
    }

    let outcomes: Vec<QuestionOutcome> = questions
        .iter()
        .enumerate()
        .map(|(i, question)| QuestionOutcome {
            question_id: question.id(),
            chosen: answers.get(i).copied(),
            correct: question.correct_answer(),
        })
        .collect();

    let score = u32::try_from(outcomes.iter().filter(|o| o.is_correct()).count())
        .unwrap_or(u32::MAX);
    let total = u32::try_from(questions.len()).unwrap_or(u32::MAX);
    // Multiply first so exact ratios like 3/5 land on 60.0.
    let percentage = f64::from(score) * 100.0 / f64::from(total);

    Ok(ScoreReport {
        score,
        total,
        percentage,
        tier: FeedbackTier::from_percentage(percentage),
        outcomes,
    })
}
