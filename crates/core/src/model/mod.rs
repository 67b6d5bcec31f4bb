mod bank;
mod ids;
mod question;

pub use bank::QuestionBank;
pub use ids::QuestionId;
pub use question::{OptionLetter, QuestionError, QuestionRecord};
