use std::sync::Arc;

use quiz_core::model::{Advance, Question, QuestionBank, QuizPhase, SessionState};
use quiz_core::{Countdown, CountdownEvent, QuizSettings};

use crate::error::QuizError;
use crate::report::{QuestionReview, QuizProgress, ScoreReport};

/// Owns one quiz attempt and its per-question countdown.
///
/// Every operation is total: calls that make no sense in the current phase
/// (answering before the start, going back from the first question, ...) leave
/// the state untouched. Navigation resets the countdown; countdown expiry goes
/// through the same `next_question` transition as a manual advance.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    bank: Arc<QuestionBank>,
    settings: QuizSettings,
    state: SessionState,
    countdown: Countdown,
}

impl QuizEngine {
    /// Create a not-started quiz over `bank`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyBank` if the bank has no questions.
    pub fn new(bank: Arc<QuestionBank>, settings: QuizSettings) -> Result<Self, QuizError> {
        if bank.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        let state = SessionState::new(bank.len());
        let countdown = Countdown::new(settings.question_secs());
        Ok(Self {
            bank,
            settings,
            state,
            countdown,
        })
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    /// The question on screen, only while the quiz is in progress.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if !self.state.is_in_progress() {
            return None;
        }
        self.bank.get(self.state.current_index())
    }

    /// The recorded answer for the question on screen, only while the quiz is
    /// in progress.
    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        if !self.state.is_in_progress() {
            return None;
        }
        self.state.answer(self.state.current_index())
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Generation of the running countdown; ticks must carry this value.
    #[must_use]
    pub fn timer_generation(&self) -> u64 {
        self.countdown.generation()
    }

    #[must_use]
    pub fn is_first_question(&self) -> bool {
        self.state.current_index() == 0
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.state.current_index() + 1 >= self.bank.len()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            number: self.state.current_index() + 1,
            total: self.bank.len(),
            answered: self.state.answered_count(),
            is_last: self.is_last_question(),
        }
    }

    pub fn start(&mut self) {
        if !self.state.start() {
            tracing::debug!("start ignored: quiz already started");
            return;
        }
        self.reset_timer();
        tracing::info!(questions = self.bank.len(), "quiz started");
    }

    /// Record `option` as the answer to the current question.
    pub fn select_answer(&mut self, option: impl Into<String>) {
        let option = option.into();
        let index = self.state.current_index();
        if self.state.record_answer(option) {
            tracing::debug!(index, "answer recorded");
        } else {
            tracing::debug!(phase = ?self.phase(), "answer ignored outside an attempt");
        }
    }

    /// Move to the next question, or finish from the last one.
    pub fn next_question(&mut self) {
        match self.state.advance() {
            Advance::Moved { index } => {
                self.reset_timer();
                tracing::debug!(index, "moved to next question");
            }
            Advance::Finished => self.log_finished("last question left"),
            Advance::Ignored => {
                tracing::debug!(phase = ?self.phase(), "next ignored outside an attempt");
            }
        }
    }

    pub fn previous_question(&mut self) {
        if let Some(index) = self.state.retreat() {
            self.reset_timer();
            tracing::debug!(index, "moved to previous question");
        }
    }

    /// Finish immediately. The caller is responsible for asking the user first.
    pub fn end_early(&mut self) {
        if self.state.finish() {
            self.log_finished("ended early");
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.state.score(&self.bank)
    }

    #[must_use]
    pub fn report(&self) -> ScoreReport {
        let questions = self
            .bank
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionReview {
                number: index + 1,
                prompt: question.prompt().to_string(),
                selected: self.state.answer(index).map(str::to_string),
                correct_answer: question.answer().to_string(),
                is_correct: self.state.is_correct(index, &self.bank),
            })
            .collect();

        ScoreReport {
            score: self.score(),
            total: self.bank.len(),
            questions,
        }
    }

    /// Discard the attempt and return to the welcome state.
    pub fn restart(&mut self) {
        self.state = SessionState::new(self.bank.len());
        self.reset_timer();
        tracing::info!("quiz restarted");
    }

    /// Deliver one countdown tick scheduled for `generation`.
    ///
    /// Ticks outside an attempt or for a superseded countdown are dropped.
    /// Expiry advances exactly like `next_question`.
    pub fn tick(&mut self, generation: u64) -> Option<CountdownEvent> {
        if !self.state.is_in_progress() {
            return None;
        }
        let event = self.countdown.tick_for(generation);
        match event {
            Some(CountdownEvent::Expired) => {
                tracing::debug!(index = self.state.current_index(), "question timed out");
                self.next_question();
            }
            Some(CountdownEvent::Tick { .. }) => {}
            None => {
                tracing::trace!(
                    generation,
                    current = self.countdown.generation(),
                    "stale tick dropped"
                );
            }
        }
        event
    }

    fn reset_timer(&mut self) {
        self.countdown.reset(self.settings.question_secs());
    }

    fn log_finished(&self, reason: &'static str) {
        tracing::info!(
            score = self.score(),
            total = self.bank.len(),
            reason,
            "quiz finished"
        );
    }
}
