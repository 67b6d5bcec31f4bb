//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::ScoreError;
use storage::StorageError;

/// Errors emitted by `QuizSampler`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SamplerError {
    #[error("question bank is empty")]
    EmptyBank,
}

/// Errors emitted by the quiz state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available")]
    EmptyBank,
    #[error("invalid option label: {raw:?}")]
    InvalidSelection { raw: String },
    #[error("cannot score an empty session")]
    DivisionByZeroGuard,
    #[error("failed to load question bank: {0}")]
    LoadFailed(String),
}

impl From<SamplerError> for QuizError {
    fn from(err: SamplerError) -> Self {
        match err {
            SamplerError::EmptyBank => Self::EmptyBank,
        }
    }
}

impl From<ScoreError> for QuizError {
    fn from(_: ScoreError) -> Self {
        Self::DivisionByZeroGuard
    }
}

impl From<StorageError> for QuizError {
    fn from(err: StorageError) -> Self {
        Self::LoadFailed(err.to_string())
    }
}
