use services::{FinishedSnapshot, QuestionSnapshot, QuizSnapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    BankUnavailable,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::BankUnavailable => "Error: the question bank could not be loaded or is empty.",
        }
    }
}

/// What the quiz canvas shows.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizScreen {
    Question(QuestionSnapshot),
    Results(FinishedSnapshot),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Error { error: ViewError, detail: String },
}

#[must_use]
pub fn view_state_from_snapshot(snapshot: QuizSnapshot) -> ViewState<QuizScreen> {
    match snapshot {
        QuizSnapshot::Loading => ViewState::Loading,
        QuizSnapshot::Error { message } => ViewState::Error {
            error: ViewError::BankUnavailable,
            detail: message,
        },
        QuizSnapshot::InProgress(question) => ViewState::Ready(QuizScreen::Question(question)),
        QuizSnapshot::Finished(finished) => ViewState::Ready(QuizScreen::Results(finished)),
    }
}
