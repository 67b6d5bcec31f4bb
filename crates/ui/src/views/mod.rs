mod quiz;
mod state;

pub use quiz::{QuestionPanel, QuizView, ResultPanel};
pub use state::{QuizScreen, ViewError, ViewState, view_state_from_snapshot};

#[cfg(test)]
pub(crate) use quiz::QuizTestHandles;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
