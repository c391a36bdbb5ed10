/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based number of the current question.
    pub number: usize,
    pub total: usize,
    pub answered: usize,
    pub is_last: bool,
}

/// Outcome of one question in a finished (or abandoned) attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview {
    pub number: usize,
    pub prompt: String,
    pub selected: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Score plus a per-question breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub score: usize,
    pub total: usize,
    pub questions: Vec<QuestionReview>,
}

impl ScoreReport {
    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.total.saturating_sub(self.score)
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }
}
