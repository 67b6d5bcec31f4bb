use std::sync::Arc;

use crate::model::QuestionRecord;

/// The full set of questions available to quiz sessions.
///
/// Cloning is cheap; sessions hold `Arc` references into the same records.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    records: Arc<[Arc<QuestionRecord>]>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self {
            records: records.into_iter().map(Arc::new).collect(),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[Arc<QuestionRecord>] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<QuestionRecord>> for QuestionBank {
    fn from(records: Vec<QuestionRecord>) -> Self {
        Self::new(records)
    }
}
