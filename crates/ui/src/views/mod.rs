mod confirm;
mod question;
mod quiz;
mod results;
mod state;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use confirm::ConfirmEndModal;
pub use question::QuestionPanel;
pub use quiz::{QuizScreen, QuizView};
pub use results::ResultsPanel;
pub use state::ViewError;
pub use welcome::WelcomePanel;
