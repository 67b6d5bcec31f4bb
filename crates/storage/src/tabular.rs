//! CSV question bank.
//!
//! Expected header row (English or Chinese headers):
//! `prompt|題目, option_a|選項A, option_b|選項B, option_c|選項C, option_d|選項D, answer|正確答案`.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecord, Trim};
use quiz_core::model::{QuestionId, QuestionRecord};
use serde::Deserialize;

use crate::repository::{QuestionBankRepository, StorageError};

#[derive(Debug, Deserialize)]
struct QuestionRow {
    #[serde(alias = "題目")]
    prompt: String,
    #[serde(alias = "選項A")]
    option_a: String,
    #[serde(alias = "選項B")]
    option_b: String,
    #[serde(alias = "選項C")]
    option_c: String,
    #[serde(alias = "選項D")]
    option_d: String,
    #[serde(alias = "正確答案")]
    answer: String,
}

const REQUIRED_COLUMNS: [(&str, &str); 6] = [
    ("prompt", "題目"),
    ("option_a", "選項A"),
    ("option_b", "選項B"),
    ("option_c", "選項C"),
    ("option_d", "選項D"),
    ("answer", "正確答案"),
];

fn check_headers(headers: &StringRecord) -> Result<(), StorageError> {
    for (english, chinese) in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == english || h == chinese) {
            return Err(StorageError::MissingColumn { column: english });
        }
    }
    Ok(())
}

/// Parses a CSV question bank.
///
/// Rows with a blank prompt or an answer that is not a single letter A-D are skipped.
/// Ids are assigned 1-based in the order rows are accepted.
///
/// # Errors
///
/// Returns `StorageError::MissingColumn` if the header row lacks a required column,
/// or `StorageError::Csv` if the header row itself cannot be read.
pub fn parse_questions<R: io::Read>(reader: R) -> Result<Vec<QuestionRecord>, StorageError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    check_headers(reader.headers()?)?;

    let mut questions = Vec::new();
    for row in reader.deserialize::<QuestionRow>() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                let line = err.position().map_or(0, csv::Position::line);
                tracing::warn!(line, error = %err, "skipping unreadable question row");
                continue;
            }
        };

        let id = QuestionId::new(questions.len() as u64 + 1);
        let options = [row.option_a, row.option_b, row.option_c, row.option_d];
        match QuestionRecord::from_raw(id, row.prompt, options, &row.answer) {
            Ok(record) => questions.push(record),
            Err(err) => tracing::warn!(error = %err, "skipping invalid question row"),
        }
    }

    tracing::debug!(count = questions.len(), "parsed question bank");
    Ok(questions)
}

/// Question bank stored as a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvQuestionBank {
    path: PathBuf,
}

impl CsvQuestionBank {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionBankRepository for CsvQuestionBank {
    async fn load_questions(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound {
                    path: self.path.clone(),
                });
            }
            Err(err) => return Err(err.into()),
        };

        let questions = parse_questions(bytes.as_slice())?;
        tracing::info!(
            path = %self.path.display(),
            count = questions.len(),
            "loaded question bank"
        );
        Ok(questions)
    }
}
