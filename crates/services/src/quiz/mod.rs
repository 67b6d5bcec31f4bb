mod machine;
mod progress;
mod session;
mod view;

pub use machine::{QuizMachine, SessionState, Transition};
pub use progress::QuizProgress;
pub use session::QuizSession;
pub use view::{FinishedSnapshot, OptionSnapshot, QuestionSnapshot, QuizSnapshot};
