use std::sync::Arc;

use quiz_core::{CanvasSize, QuizLayout};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use services::{DEFAULT_QUIZ_SIZE, QuizMachine, QuizSampler};
use storage::QuestionBankRepository;

/// User-tunable quiz knobs, resolved by the binary before launch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuizSettings {
    pub canvas: CanvasSize,
    pub quiz_size: usize,
    /// Fixed RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            quiz_size: DEFAULT_QUIZ_SIZE,
            seed: None,
        }
    }
}

pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> Arc<dyn QuestionBankRepository>;
    fn quiz_settings(&self) -> QuizSettings;
}

#[derive(Clone)]
pub struct AppContext {
    question_bank: Arc<dyn QuestionBankRepository>,
    settings: QuizSettings,
    layout: QuizLayout,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let settings = app.quiz_settings();
        Self {
            question_bank: app.question_bank(),
            settings,
            layout: QuizLayout::compute(settings.canvas),
        }
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<dyn QuestionBankRepository> {
        Arc::clone(&self.question_bank)
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    /// Geometry shared by drawing and hit-testing.
    #[must_use]
    pub fn layout(&self) -> QuizLayout {
        self.layout
    }

    /// A machine in `Loading`, sized and seeded from the settings.
    #[must_use]
    pub fn new_machine(&self) -> QuizMachine<StdRng> {
        let rng = self
            .settings
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        QuizMachine::new(rng).with_sampler(QuizSampler::new(self.settings.quiz_size))
    }
}

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
