use crate::model::QuestionBank;

/// Coarse lifecycle of a quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    InProgress,
    Finished,
}

/// Result of trying to move to the next question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at `index`.
    Moved { index: usize },
    /// The last question was left; the attempt is over.
    Finished,
    /// Not in progress; nothing changed.
    Ignored,
}

/// Mutable state of one quiz attempt.
///
/// `answers` always has one slot per question; `None` marks an unanswered
/// question. `current_index` is only meaningful while the attempt is in
/// progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    started: bool,
    current_index: usize,
    answers: Vec<Option<String>>,
    finished: bool,
}

impl SessionState {
    /// Creates a not-started attempt for `question_count` questions.
    #[must_use]
    pub fn new(question_count: usize) -> Self {
        Self {
            started: false,
            current_index: 0,
            answers: vec![None; question_count],
            finished: false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match (self.started, self.finished) {
            (false, _) => QuizPhase::NotStarted,
            (true, false) => QuizPhase::InProgress,
            (true, true) => QuizPhase::Finished,
        }
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.phase() == QuizPhase::InProgress
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    /// The recorded answer for `index`, if any.
    #[must_use]
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(index).and_then(Option::as_deref)
    }

    /// Number of questions with a recorded answer.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|slot| slot.is_some()).count()
    }

    /// Leaves the welcome state. Returns false if already started.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.current_index = 0;
        true
    }

    /// Records `answer` for the current question, replacing any earlier choice.
    ///
    /// The value is not checked against the question's options.
    pub fn record_answer(&mut self, answer: String) -> bool {
        if !self.is_in_progress() {
            return false;
        }
        match self.answers.get_mut(self.current_index) {
            Some(slot) => {
                *slot = Some(answer);
                true
            }
            None => false,
        }
    }

    /// Moves forward one question, finishing the attempt from the last one.
    pub fn advance(&mut self) -> Advance {
        if !self.is_in_progress() {
            return Advance::Ignored;
        }
        if self.current_index + 1 < self.answers.len() {
            self.current_index += 1;
            Advance::Moved {
                index: self.current_index,
            }
        } else {
            self.finished = true;
            Advance::Finished
        }
    }

    /// Moves back one question. Returns the new index, or `None` at the first
    /// question or outside an attempt.
    pub fn retreat(&mut self) -> Option<usize> {
        if !self.is_in_progress() || self.current_index == 0 {
            return None;
        }
        self.current_index -= 1;
        Some(self.current_index)
    }

    /// Ends the attempt immediately, leaving unanswered slots as they are.
    pub fn finish(&mut self) -> bool {
        if !self.is_in_progress() {
            return false;
        }
        self.finished = true;
        true
    }

    /// Returns true when the answer at `index` matches the bank exactly.
    #[must_use]
    pub fn is_correct(&self, index: usize, bank: &QuestionBank) -> bool {
        match (self.answer(index), bank.get(index)) {
            (Some(selected), Some(question)) => question.is_correct(selected),
            _ => false,
        }
    }

    /// Counts exact matches between recorded answers and the bank.
    #[must_use]
    pub fn score(&self, bank: &QuestionBank) -> usize {
        self.answers
            .iter()
            .zip(bank)
            .filter(|(slot, question)| {
                slot.as_deref()
                    .is_some_and(|selected| question.is_correct(selected))
            })
            .count()
    }
}
