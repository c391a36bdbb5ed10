use thiserror::Error;

/// Seconds allowed per question.
pub const DEFAULT_QUESTION_SECS: u32 = 30;

/// Remaining seconds at or below which the time display is highlighted.
pub const URGENT_THRESHOLD_SECS: u32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("question duration must be greater than zero")]
    ZeroDuration,
}

/// Timing knobs for a quiz session.
///
/// These are fixed at compile time for the shipped app; `new` exists so tests
/// can run shorter sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    question_secs: u32,
    urgent_secs: u32,
}

impl QuizSettings {
    /// Creates custom settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::ZeroDuration` if `question_secs` is zero.
    pub fn new(question_secs: u32, urgent_secs: u32) -> Result<Self, SettingsError> {
        if question_secs == 0 {
            return Err(SettingsError::ZeroDuration);
        }
        Ok(Self {
            question_secs,
            urgent_secs,
        })
    }

    #[must_use]
    pub fn question_secs(&self) -> u32 {
        self.question_secs
    }

    #[must_use]
    pub fn urgent_secs(&self) -> u32 {
        self.urgent_secs
    }

    /// Returns true when `remaining` should be shown as running out.
    #[must_use]
    pub fn is_urgent(&self, remaining: u32) -> bool {
        remaining <= self.urgent_secs
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            question_secs: DEFAULT_QUESTION_SECS,
            urgent_secs: URGENT_THRESHOLD_SECS,
        }
    }
}
