#![forbid(unsafe_code)]

pub mod dispatch;
pub mod error;
pub mod quiz;
pub mod sampler;

pub use quiz_core::Clock;

pub use dispatch::{KeyCommand, handle_click, handle_key};
pub use error::{QuizError, SamplerError};
pub use quiz::{
    FinishedSnapshot, OptionSnapshot, QuestionSnapshot, QuizMachine, QuizProgress, QuizSession,
    QuizSnapshot, SessionState, Transition,
};
pub use sampler::{DEFAULT_QUIZ_SIZE, QuizSampler};

use quiz_core::model::QuestionBank;
use storage::QuestionBankRepository;

/// Loads the bank from `repository` once, ready for `QuizMachine::bank_loaded`.
///
/// # Errors
///
/// Returns `QuizError::LoadFailed` if the repository cannot produce the bank.
pub async fn load_bank(repository: &dyn QuestionBankRepository) -> Result<QuestionBank, QuizError> {
    let questions = repository.load_questions().await?;
    Ok(QuestionBank::new(questions))
}
