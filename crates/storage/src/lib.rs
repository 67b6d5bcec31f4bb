#![forbid(unsafe_code)]

pub mod repository;
pub mod tabular;

pub use repository::{InMemoryRepository, QuestionBankRepository, Storage, StorageError};
pub use tabular::{CsvQuestionBank, parse_questions};
