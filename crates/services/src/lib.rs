#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod report;
pub mod timer;

pub use quiz_core::{CountdownEvent, QuizSettings};

pub use engine::QuizEngine;
pub use error::QuizError;
pub use report::{QuestionReview, QuizProgress, ScoreReport};
pub use timer::{TICK_INTERVAL, run_countdown};
