//! Session scoring and outcome history.

use serde::Serialize;

use crate::error::{DrillError, DrillResult};
use crate::model::{Outcome, OutcomeStatus, Question, SKIPPED_MARKER};

/// Mutable per-session counters, owned by [`SessionTracker`].
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Questions presented so far.
    pub asked_count: usize,
    pub score: usize,
    /// Outcomes in resolution order.
    pub outcomes: Vec<Outcome>,
    pub question_budget: usize,
}

/// End-of-session counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub correct_count: usize,
    pub incorrect_count: usize,
    pub skipped_count: usize,
    /// Budgeted questions that never received an outcome.
    pub not_reached_count: usize,
    /// Percentage of answered (not skipped) questions that were correct.
    pub attempted_accuracy: u32,
    pub final_score: usize,
    pub total_questions: usize,
}

/// Rounded percentage of `correct` over `attempted`, or 0 when nothing was attempted.
pub fn attempted_accuracy(correct: usize, attempted: usize) -> u32 {
    if attempted == 0 {
        return 0;
    }
    (correct as f64 / attempted as f64 * 100.0).round() as u32
}

/// Records outcomes and computes scores for one session at a time.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    state: SessionState,
}

impl SessionTracker {
    pub fn new(question_budget: usize) -> Self {
        Self {
            state: SessionState {
                question_budget,
                ..SessionState::default()
            },
        }
    }

    /// Discard everything and start over with a new budget.
    pub fn reset(&mut self, question_budget: usize) {
        self.state = SessionState {
            question_budget,
            ..SessionState::default()
        };
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn score(&self) -> usize {
        self.state.score
    }

    pub fn question_budget(&self) -> usize {
        self.state.question_budget
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.state.outcomes
    }

    /// Sequence number for the next question to present.
    pub fn next_sequence_number(&self) -> usize {
        self.state.asked_count + 1
    }

    /// Count a question as presented.
    pub fn mark_presented(&mut self) {
        self.state.asked_count += 1;
    }

    /// Whether every budgeted question has an outcome.
    pub fn budget_exhausted(&self) -> bool {
        self.state.outcomes.len() >= self.state.question_budget
    }

    fn is_resolved(&self, question: &Question) -> bool {
        self.state
            .outcomes
            .iter()
            .any(|o| o.question.sequence_number == question.sequence_number)
    }

    fn push(
        &mut self,
        question: &Question,
        status: OutcomeStatus,
        selected: String,
    ) -> DrillResult<Outcome> {
        if self.is_resolved(question) {
            return Err(DrillError::AlreadyResolved {
                sequence_number: question.sequence_number,
            });
        }
        let outcome = Outcome {
            question: question.clone(),
            status,
            selected_answer: selected,
        };
        self.state.outcomes.push(outcome.clone());
        Ok(outcome)
    }

    /// Record an answer. Exact, case-sensitive match against the correct answer.
    pub fn record_answer(&mut self, question: &Question, selected: &str) -> DrillResult<Outcome> {
        let status = if selected == question.correct_answer {
            OutcomeStatus::Correct
        } else {
            OutcomeStatus::Incorrect
        };
        let outcome = self.push(question, status, selected.to_string())?;
        if status == OutcomeStatus::Correct {
            self.state.score += 1;
        }
        Ok(outcome)
    }

    /// Record a skip. Never changes the score.
    pub fn record_skip(&mut self, question: &Question) -> DrillResult<Outcome> {
        self.push(question, OutcomeStatus::Skipped, SKIPPED_MARKER.to_string())
    }

    pub fn summary(&self) -> SessionSummary {
        let count = |status: OutcomeStatus| {
            self.state
                .outcomes
                .iter()
                .filter(|o| o.status == status)
                .count()
        };
        let correct_count = count(OutcomeStatus::Correct);
        let incorrect_count = count(OutcomeStatus::Incorrect);
        let skipped_count = count(OutcomeStatus::Skipped);

        SessionSummary {
            correct_count,
            incorrect_count,
            skipped_count,
            not_reached_count: self
                .state
                .question_budget
                .saturating_sub(self.state.outcomes.len()),
            attempted_accuracy: attempted_accuracy(correct_count, correct_count + incorrect_count),
            final_score: self.state.score,
            total_questions: self.state.question_budget,
        }
    }
}
