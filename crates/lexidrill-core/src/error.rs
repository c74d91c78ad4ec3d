//! Drill error types.
//!
//! Load failures, question-building failures and state machine misuse all
//! share one enum so the front end can classify them without string matching.

use thiserror::Error;

/// Remediation shown alongside every load failure.
pub const LOAD_HINT: &str =
    "Serve the word list over HTTP or point --source at a readable local file";

/// Errors raised by the drill core.
#[derive(Debug, Error)]
pub enum DrillError {
    /// The corpus text could not be retrieved.
    #[error("failed to load {source_name} ({reason})")]
    SourceUnavailable { source_name: String, reason: String },

    /// Fewer usable entries than one multiple-choice question needs.
    #[error("need at least {required} valid term lines, found {found}")]
    CorpusTooSmall { found: usize, required: usize },

    /// Not enough unique wrong answers to fill the choice set.
    #[error(
        "not enough unique items to build multiple choice options \
         ({available} available, {required} required)"
    )]
    InsufficientDistractors { available: usize, required: usize },

    /// A question was requested before the session was started.
    #[error("session has not been started")]
    NotStarted,

    /// A new question was requested while the current one is unresolved.
    #[error("question {sequence_number} has not been answered or skipped")]
    QuestionPending { sequence_number: usize },

    /// An answer or skip arrived with no question on screen.
    #[error("no question is awaiting an answer")]
    NoPendingQuestion,

    /// A second outcome was reported for the same question.
    #[error("question {sequence_number} already has an outcome")]
    AlreadyResolved { sequence_number: usize },
}

impl DrillError {
    /// Returns `true` for failures that prevent a session from starting.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            DrillError::SourceUnavailable { .. } | DrillError::CorpusTooSmall { .. }
        )
    }

    /// Human-readable message for load failures, with the remediation hint.
    pub fn with_hint(&self) -> String {
        if self.is_load_error() {
            format!("{self}. {LOAD_HINT}.")
        } else {
            self.to_string()
        }
    }
}

/// Result alias for drill operations.
pub type DrillResult<T> = std::result::Result<T, DrillError>;
