#![forbid(unsafe_code)]

pub mod layout;
pub mod model;
pub mod score;
pub mod time;

pub use layout::{CanvasSize, HitTarget, Point, QuizLayout, Rect, ResultLayout};
pub use score::{FeedbackTier, QuestionOutcome, ScoreError, ScoreReport, score};
pub use time::Clock;
