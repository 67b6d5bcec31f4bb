use chrono::Duration;

use quiz_core::ScoreReport;
use quiz_core::model::OptionLetter;

/// Render contract: one value per frame, no references into the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizSnapshot {
    Loading,
    Error { message: String },
    InProgress(QuestionSnapshot),
    Finished(FinishedSnapshot),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSnapshot {
    pub letter: OptionLetter,
    pub text: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSnapshot {
    /// 1-based position in the session.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionSnapshot>,
    pub selected: Option<OptionLetter>,
    /// False until an option is selected.
    pub advance_enabled: bool,
    pub is_last: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinishedSnapshot {
    pub report: ScoreReport,
    pub elapsed: Option<Duration>,
}
