#![forbid(unsafe_code)]

pub mod bank;
pub mod countdown;
pub mod model;
pub mod settings;

pub use countdown::{Countdown, CountdownEvent};
pub use settings::QuizSettings;
