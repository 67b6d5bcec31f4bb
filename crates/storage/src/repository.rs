use async_trait::async_trait;
use quiz_core::model::QuestionRecord;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::tabular::CsvQuestionBank;

/// Errors surfaced by question bank adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("question bank not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("question bank is missing column {column:?}")]
    MissingColumn { column: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Source of the question bank. Loaded once, before any quiz session starts.
#[async_trait]
pub trait QuestionBankRepository: Send + Sync {
    /// Load every usable question, in source order.
    ///
    /// An empty list is a valid result; callers decide how to treat an empty bank.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or is malformed as a whole.
    async fn load_questions(&self) -> Result<Vec<QuestionRecord>, StorageError>;
}

/// Fixed in-memory bank for tests and demos.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<Vec<QuestionRecord>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        Self {
            questions: Arc::new(questions),
        }
    }
}

#[async_trait]
impl QuestionBankRepository for InMemoryRepository {
    async fn load_questions(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        Ok(self.questions.as_ref().clone())
    }
}

/// Holds the active question bank adapter behind a trait object.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionBankRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(questions: Vec<QuestionRecord>) -> Self {
        Self {
            questions: Arc::new(InMemoryRepository::new(questions)),
        }
    }

    #[must_use]
    pub fn csv(path: impl Into<PathBuf>) -> Self {
        Self {
            questions: Arc::new(CsvQuestionBank::new(path)),
        }
    }
}
