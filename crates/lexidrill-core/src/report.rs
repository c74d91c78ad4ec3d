//! End-of-session report with JSON export.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use crate::engine::Drill;
use crate::model::{Direction, DirectionMode, LanguagePair, OutcomeStatus};
use crate::tracker::SessionSummary;

/// A finished (or abandoned) drill session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Where the word list came from.
    pub source: String,
    pub languages: LanguagePair,
    pub mode: DirectionMode,
    pub summary: SessionSummary,
    /// One entry per resolved question, in resolution order.
    pub details: Vec<QuestionDetail>,
}

/// Per-question line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDetail {
    pub sequence_number: usize,
    pub direction: Direction,
    pub prompt: String,
    pub selected_answer: String,
    pub correct_answer: String,
    pub status: OutcomeStatus,
}

impl SessionReport {
    /// Snapshot the drill's outcomes and summary.
    pub fn from_drill<R: Rng>(drill: &Drill<R>, source: &str, languages: LanguagePair) -> Self {
        let details = drill
            .outcomes()
            .iter()
            .map(|o| QuestionDetail {
                sequence_number: o.question.sequence_number,
                direction: o.question.direction,
                prompt: o.question.prompt.clone(),
                selected_answer: o.selected_answer.clone(),
                correct_answer: o.question.correct_answer.clone(),
                status: o.status,
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            source: source.to_string(),
            languages,
            mode: drill.settings().mode,
            summary: drill.summary(),
            details,
        }
    }

    /// Questions that were answered wrongly or skipped.
    pub fn misses(&self) -> impl Iterator<Item = &QuestionDetail> {
        self.details
            .iter()
            .filter(|d| d.status != OutcomeStatus::Correct)
    }

    /// "Final score: 3/4" style headline.
    pub fn headline(&self) -> String {
        format!(
            "Final score: {}/{}",
            self.summary.final_score, self.summary.total_questions
        )
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }
}
