use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("invalid answer letter: {raw:?}")]
    InvalidAnswer { raw: String },
}

//
// ─── OPTION LETTER ────────────────────────────────────────────────────────────
//

/// Label of one of the four answer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    /// All labels in display order.
    pub const ALL: [OptionLetter; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Parses a single letter, ignoring surrounding whitespace and case.
    ///
    /// Anything other than exactly one of `A`..=`D` yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let mut chars = raw.trim().chars();
        let letter = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match letter.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

//
// ─── QUESTION RECORD ──────────────────────────────────────────────────────────
//

/// One multiple-choice question from the bank. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    id: QuestionId,
    prompt: String,
    options: [String; 4],
    correct_answer: OptionLetter,
}

impl QuestionRecord {
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` if the prompt is blank.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: [String; 4],
        correct_answer: OptionLetter,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into().trim().to_owned();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        Ok(Self {
            id,
            prompt,
            options: options.map(|option| option.trim().to_owned()),
            correct_answer,
        })
    }

    /// Builds a record from raw tabular fields, normalizing the answer column.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidAnswer` if `answer` is not a single letter A-D,
    /// or `QuestionError::EmptyPrompt` if the prompt is blank.
    pub fn from_raw(
        id: QuestionId,
        prompt: impl Into<String>,
        options: [String; 4],
        answer: &str,
    ) -> Result<Self, QuestionError> {
        let correct_answer = OptionLetter::parse(answer).ok_or_else(|| {
            QuestionError::InvalidAnswer {
                raw: answer.to_owned(),
            }
        })?;
        Self::new(id, prompt, options, correct_answer)
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String; 4] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, letter: OptionLetter) -> &str {
        &self.options[letter.index()]
    }

    #[must_use]
    pub fn correct_answer(&self) -> OptionLetter {
        self.correct_answer
    }

    #[must_use]
    pub fn is_correct(&self, chosen: OptionLetter) -> bool {
        self.correct_answer == chosen
    }
}
