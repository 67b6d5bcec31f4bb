use rand::Rng;
use std::fmt;
use std::sync::Arc;

use quiz_core::model::{OptionLetter, QuestionBank, QuestionRecord};
use quiz_core::{Clock, ScoreReport};

use super::session::QuizSession;
use super::view::{FinishedSnapshot, OptionSnapshot, QuestionSnapshot, QuizSnapshot};
use crate::error::QuizError;
use crate::sampler::QuizSampler;

/// Coarse state exposed to renderers and input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    Error,
    InProgress,
    Finished,
}

/// What a single machine operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The call was not valid in the current state (or its guard failed); nothing changed.
    Ignored,
    Started,
    Selected(OptionLetter),
    /// An answer was committed and another question follows.
    Advanced,
    /// The last answer was committed.
    Finished,
    /// The machine entered the terminal error state.
    Failed,
}

enum Stage {
    Loading,
    Error(QuizError),
    InProgress(QuizSession),
    Finished(QuizSession),
}

/// Owns the quiz: the loaded bank, the current session, and the state it is in.
///
/// `Loading → InProgress ⇄ (advance) → Finished → (restart) → InProgress`. `Error` is only
/// reachable from `Loading` and is terminal.
pub struct QuizMachine<R> {
    rng: R,
    sampler: QuizSampler,
    clock: Clock,
    bank: Option<QuestionBank>,
    stage: Stage,
}

impl<R: Rng> QuizMachine<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            sampler: QuizSampler::default(),
            clock: Clock::default(),
            bank: None,
            stage: Stage::Loading,
        }
    }

    #[must_use]
    pub fn with_sampler(mut self, sampler: QuizSampler) -> Self {
        self.sampler = sampler;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        match self.stage {
            Stage::Loading => SessionState::Loading,
            Stage::Error(_) => SessionState::Error,
            Stage::InProgress(_) => SessionState::InProgress,
            Stage::Finished(_) => SessionState::Finished,
        }
    }

    //
    // ─── LOADING ──────────────────────────────────────────────────────────────
    //

    /// Hands the loaded bank to the machine and starts the first session.
    pub fn bank_loaded(&mut self, bank: QuestionBank) -> Transition {
        if !matches!(self.stage, Stage::Loading) {
            return Transition::Ignored;
        }
        tracing::info!(questions = bank.len(), "question bank ready");
        self.bank = Some(bank);
        self.start()
    }

    /// Records a loader failure. Only valid while loading.
    pub fn bank_failed(&mut self, err: impl Into<QuizError>) -> Transition {
        if !matches!(self.stage, Stage::Loading) {
            return Transition::Ignored;
        }
        let err = err.into();
        tracing::error!(error = %err, "quiz unavailable");
        self.stage = Stage::Error(err);
        Transition::Failed
    }

    //
    // ─── SESSION LIFECYCLE ────────────────────────────────────────────────────
    //

    /// Samples a fresh session and enters `InProgress` at the first question.
    ///
    /// Ignored while no bank is loaded or after an error. An empty bank moves the machine
    /// into `Error`.
    pub fn start(&mut self) -> Transition {
        if matches!(self.stage, Stage::Error(_)) {
            return Transition::Ignored;
        }
        let Some(bank) = self.bank.as_ref() else {
            return Transition::Ignored;
        };

        let sampled = self
            .sampler
            .sample(bank.records(), &mut self.rng)
            .map_err(QuizError::from)
            .and_then(|picked| {
                QuizSession::new(picked.into_iter().map(Arc::clone).collect(), self.clock.now())
            });

        match sampled {
            Ok(session) => {
                tracing::debug!(questions = session.len(), "quiz session started");
                self.stage = Stage::InProgress(session);
                Transition::Started
            }
            Err(err) => {
                tracing::error!(error = %err, "cannot start quiz");
                self.stage = Stage::Error(err);
                Transition::Failed
            }
        }
    }

    /// Starts over after a finished session.
    pub fn restart(&mut self) -> Transition {
        if !matches!(self.stage, Stage::Finished(_)) {
            return Transition::Ignored;
        }
        self.start()
    }

    //
    // ─── ANSWERING ────────────────────────────────────────────────────────────
    //

    /// Marks `letter` as the pending choice for the current question.
    pub fn select_option(&mut self, letter: OptionLetter) -> Transition {
        let Stage::InProgress(session) = &mut self.stage else {
            return Transition::Ignored;
        };
        session.select(letter);
        tracing::trace!(%letter, index = session.current_index(), "option selected");
        Transition::Selected(letter)
    }

    /// Like [`Self::select_option`], for labels coming from untyped input.
    pub fn select_label(&mut self, raw: &str) -> Transition {
        match OptionLetter::parse(raw) {
            Some(letter) => self.select_option(letter),
            None => {
                let err = QuizError::InvalidSelection { raw: raw.to_owned() };
                tracing::debug!(error = %err, "selection ignored");
                Transition::Ignored
            }
        }
    }

    /// Commits the pending choice and moves on. Without a pending choice this does nothing.
    pub fn advance(&mut self) -> Transition {
        let now = self.clock.now();
        let Stage::InProgress(session) = &mut self.stage else {
            return Transition::Ignored;
        };
        let Some(letter) = session.commit(now) else {
            return Transition::Ignored;
        };
        tracing::debug!(%letter, answered = session.answers().len(), "answer committed");

        if !session.is_complete() {
            return Transition::Advanced;
        }

        let stage = std::mem::replace(&mut self.stage, Stage::Loading);
        if let Stage::InProgress(session) = stage {
            self.stage = Stage::Finished(session);
        }
        if let Some(report) = self.report() {
            tracing::info!(
                score = report.score,
                total = report.total,
                tier = report.tier.as_str(),
                "quiz finished"
            );
        }
        Transition::Finished
    }

    //
    // ─── QUERIES ──────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn bank(&self) -> Option<&QuestionBank> {
        self.bank.as_ref()
    }

    /// The current session, in progress or finished.
    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        match &self.stage {
            Stage::InProgress(session) | Stage::Finished(session) => Some(session),
            Stage::Loading | Stage::Error(_) => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        match &self.stage {
            Stage::InProgress(session) => session.current_question(),
            _ => None,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<OptionLetter> {
        match &self.stage {
            Stage::InProgress(session) => session.selected(),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&QuizError> {
        match &self.stage {
            Stage::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Score of the finished session.
    #[must_use]
    pub fn report(&self) -> Option<ScoreReport> {
        let Stage::Finished(session) = &self.stage else {
            return None;
        };
        match session.score() {
            Ok(report) => Some(report),
            Err(err) => {
                // Sessions are never empty; reaching this is a bug.
                tracing::error!(error = %err, "finished session could not be scored");
                debug_assert!(false, "finished session could not be scored: {err}");
                None
            }
        }
    }

    /// Everything a renderer needs for the current frame.
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        match &self.stage {
            Stage::Loading => QuizSnapshot::Loading,
            Stage::Error(err) => QuizSnapshot::Error {
                message: err.to_string(),
            },
            Stage::InProgress(session) => match session.current_question() {
                Some(question) => QuizSnapshot::InProgress(question_snapshot(session, question)),
                None => QuizSnapshot::Error {
                    message: QuizError::EmptyBank.to_string(),
                },
            },
            Stage::Finished(session) => match session.score() {
                Ok(report) => QuizSnapshot::Finished(FinishedSnapshot {
                    report,
                    elapsed: session
                        .completed_at()
                        .map(|completed| completed - session.started_at()),
                }),
                Err(err) => QuizSnapshot::Error {
                    message: err.to_string(),
                },
            },
        }
    }
}

fn question_snapshot(session: &QuizSession, question: &QuestionRecord) -> QuestionSnapshot {
    let selected = session.selected();
    let progress = session.progress();
    QuestionSnapshot {
        number: progress.answered + 1,
        total: progress.total,
        prompt: question.prompt().to_owned(),
        options: OptionLetter::ALL
            .iter()
            .map(|&letter| OptionSnapshot {
                letter,
                text: question.option(letter).to_owned(),
                selected: selected == Some(letter),
            })
            .collect(),
        selected,
        advance_enabled: selected.is_some(),
        is_last: session.is_last_question(),
    }
}

impl<R> fmt::Debug for QuizMachine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match &self.stage {
            Stage::Loading => "Loading",
            Stage::Error(_) => "Error",
            Stage::InProgress(_) => "InProgress",
            Stage::Finished(_) => "Finished",
        };
        f.debug_struct("QuizMachine")
            .field("stage", &stage)
            .field("bank_len", &self.bank.as_ref().map(QuestionBank::len))
            .field("sampler", &self.sampler)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
