mod question;
mod session;

pub use question::{Question, QuestionBank, QuestionBankError};
pub use session::{Advance, QuizPhase, SessionState};
