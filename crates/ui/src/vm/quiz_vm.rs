use std::sync::Arc;

use quiz_core::QuizSettings;
use quiz_core::model::{QuestionBank, QuizPhase};
use services::{CountdownEvent, QuizEngine, ScoreReport};

use super::time_fmt::format_seconds_left;
use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    SelectAnswer(String),
    Next,
    Previous,
    RequestEnd,
    ConfirmEnd,
    CancelEnd,
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub counter_label: String,
    pub time_left_label: String,
    pub time_urgent: bool,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub can_go_back: bool,
    pub next_label: &'static str,
    pub confirming_end: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub heading: String,
    pub your_answer: String,
    /// Shown only when the recorded answer was wrong or missing.
    pub correct_answer: Option<String>,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub items: Vec<ReviewItemVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Welcome,
    Question(QuestionVm),
    Results(ResultsVm),
}

/// UI-side wrapper around a `QuizEngine`.
///
/// Adds the end-early confirmation step: while it is pending every other
/// intent and every timer tick is ignored, so the modal blocks the quiz.
/// The countdown pauses at whole seconds: declining restarts the tick interval,
/// and any fraction of a second that elapsed before the prompt opened is not
/// carried over.
#[derive(Clone, Debug)]
pub struct QuizVm {
    engine: QuizEngine,
    confirming_end: bool,
}

impl QuizVm {
    /// # Errors
    ///
    /// Returns `ViewError::EmptyQuiz` when the bank has no questions.
    pub fn new(bank: Arc<QuestionBank>, settings: QuizSettings) -> Result<Self, ViewError> {
        let engine = QuizEngine::new(bank, settings).map_err(ViewError::from)?;
        Ok(Self::from_engine(engine))
    }

    #[must_use]
    pub fn from_engine(engine: QuizEngine) -> Self {
        Self {
            engine,
            confirming_end: false,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    #[must_use]
    pub fn is_confirming_end(&self) -> bool {
        self.confirming_end
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        if self.confirming_end {
            match intent {
                QuizIntent::ConfirmEnd => {
                    self.confirming_end = false;
                    self.engine.end_early();
                }
                QuizIntent::CancelEnd => self.confirming_end = false,
                QuizIntent::Restart => {
                    self.confirming_end = false;
                    self.engine.restart();
                }
                _ => {}
            }
            return;
        }

        match intent {
            QuizIntent::Start => self.engine.start(),
            QuizIntent::SelectAnswer(option) => self.engine.select_answer(option),
            QuizIntent::Next => self.engine.next_question(),
            QuizIntent::Previous => self.engine.previous_question(),
            QuizIntent::RequestEnd => {
                self.confirming_end = self.engine.phase() == QuizPhase::InProgress;
            }
            QuizIntent::ConfirmEnd | QuizIntent::CancelEnd => {}
            QuizIntent::Restart => self.engine.restart(),
        }
    }

    /// Deliver a timer tick; dropped while the confirmation modal is open.
    pub fn tick(&mut self, generation: u64) -> Option<CountdownEvent> {
        if self.confirming_end {
            return None;
        }
        self.engine.tick(generation)
    }

    /// Generation the timer task should tick, or `None` when no timer should run.
    #[must_use]
    pub fn timer_key(&self) -> Option<u64> {
        (self.engine.phase() == QuizPhase::InProgress && !self.confirming_end)
            .then(|| self.engine.timer_generation())
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreenVm {
        match self.engine.phase() {
            QuizPhase::NotStarted => QuizScreenVm::Welcome,
            QuizPhase::InProgress => self
                .question()
                .map_or(QuizScreenVm::Welcome, QuizScreenVm::Question),
            QuizPhase::Finished => QuizScreenVm::Results(map_results(&self.engine.report())),
        }
    }

    fn question(&self) -> Option<QuestionVm> {
        let question = self.engine.current_question()?;
        let progress = self.engine.progress();
        let selected = self.engine.selected_answer();
        let remaining = self.engine.remaining_secs();

        Some(QuestionVm {
            counter_label: format!("Question {} of {}", progress.number, progress.total),
            time_left_label: format_seconds_left(remaining),
            time_urgent: self.engine.settings().is_urgent(remaining),
            prompt: question.prompt().to_string(),
            options: question
                .options()
                .iter()
                .map(|option| OptionVm {
                    text: option.clone(),
                    selected: selected == Some(option.as_str()),
                })
                .collect(),
            can_go_back: !self.engine.is_first_question(),
            next_label: if progress.is_last { "Submit" } else { "Next" },
            confirming_end: self.confirming_end,
        })
    }
}

fn map_results(report: &ScoreReport) -> ResultsVm {
    ResultsVm {
        score_label: format!("You scored {} out of {}.", report.score, report.total),
        items: report
            .questions
            .iter()
            .map(|review| ReviewItemVm {
                heading: format!("{}. {}", review.number, review.prompt),
                your_answer: review.selected.clone().unwrap_or_default(),
                correct_answer: (!review.is_correct).then(|| review.correct_answer.clone()),
                is_correct: review.is_correct,
            })
            .collect(),
    }
}
