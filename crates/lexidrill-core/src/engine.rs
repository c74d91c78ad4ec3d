//! Drill session controller.
//!
//! Owns the used-index set, the tracker and the question on screen, and
//! moves a session through `NotStarted → InProgress → Finished`.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::corpus::TermCorpus;
use crate::distractor::build_choices;
use crate::error::{DrillError, DrillResult};
use crate::model::{Direction, DirectionMode, Outcome, Question};
use crate::selector::{draw_index, effective_question_count, resolve_direction, UsedIndexSet};
use crate::tracker::{SessionSummary, SessionTracker};

/// Questions per session when nothing else is configured.
pub const DEFAULT_QUESTION_COUNT: usize = 15;

/// Per-session settings chosen at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillSettings {
    pub mode: DirectionMode,
    /// Requested number of questions; capped to the corpus size.
    pub question_count: usize,
}

impl Default for DrillSettings {
    fn default() -> Self {
        Self {
            mode: DirectionMode::default(),
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Finished,
}

/// What the front end needs to show one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedQuestion {
    pub sequence_number: usize,
    pub direction: Direction,
    pub prompt: String,
    /// Always [`CHOICE_COUNT`](crate::distractor::CHOICE_COUNT) entries.
    pub choices: Vec<String>,
}

#[derive(Debug, Clone)]
struct PendingQuestion {
    question: Question,
    resolved: bool,
}

/// A single drill session over a shared corpus.
pub struct Drill<R = StdRng> {
    corpus: Arc<TermCorpus>,
    settings: DrillSettings,
    used: UsedIndexSet,
    tracker: SessionTracker,
    pending: Option<PendingQuestion>,
    phase: SessionPhase,
    rng: R,
}

impl Drill<StdRng> {
    /// Create a drill seeded from `seed`, or from the OS when `None`.
    pub fn with_seed(corpus: Arc<TermCorpus>, settings: DrillSettings, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(corpus, settings, rng)
    }
}

impl<R: Rng> Drill<R> {
    pub fn new(corpus: Arc<TermCorpus>, settings: DrillSettings, rng: R) -> Self {
        let budget = effective_question_count(settings.question_count, corpus.len());
        Self {
            corpus,
            settings,
            used: UsedIndexSet::new(),
            tracker: SessionTracker::new(budget),
            pending: None,
            phase: SessionPhase::NotStarted,
            rng,
        }
    }

    pub fn corpus(&self) -> &TermCorpus {
        &self.corpus
    }

    pub fn settings(&self) -> DrillSettings {
        self.settings
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    pub fn score(&self) -> usize {
        self.tracker.score()
    }

    /// Number of questions this session will pose at most.
    pub fn total_questions(&self) -> usize {
        self.tracker.question_budget()
    }

    pub fn outcomes(&self) -> &[Outcome] {
        self.tracker.outcomes()
    }

    /// The question currently on screen, resolved or not.
    pub fn current_question(&self) -> Option<&Question> {
        self.pending.as_ref().map(|p| &p.question)
    }

    /// Reset all session state and begin asking questions.
    pub fn start(&mut self) {
        let budget = effective_question_count(self.settings.question_count, self.corpus.len());
        self.phase = SessionPhase::NotStarted;
        self.used.reset();
        self.tracker.reset(budget);
        self.pending = None;
        self.phase = SessionPhase::InProgress;
        tracing::debug!(budget, mode = %self.settings.mode, "drill session started");
    }

    /// Same as [`start`](Self::start); provided for the "play again" path.
    pub fn restart(&mut self) {
        self.start();
    }

    /// End the session now, regardless of remaining budget.
    ///
    /// A presented but unresolved question is counted as not reached.
    pub fn end(&mut self) {
        if self.phase != SessionPhase::Finished {
            tracing::debug!(
                resolved = self.tracker.outcomes().len(),
                budget = self.tracker.question_budget(),
                "drill session finished"
            );
        }
        self.phase = SessionPhase::Finished;
        self.pending = None;
    }

    /// Draw and build the next question.
    ///
    /// Returns `Ok(None)` once the session is finished. A failed choice set
    /// leaves its corpus position consumed; calling again draws the next one.
    pub fn next_question(&mut self) -> DrillResult<Option<RenderedQuestion>> {
        match self.phase {
            SessionPhase::NotStarted => return Err(DrillError::NotStarted),
            SessionPhase::Finished => return Ok(None),
            SessionPhase::InProgress => {}
        }

        if let Some(pending) = &self.pending {
            if !pending.resolved {
                return Err(DrillError::QuestionPending {
                    sequence_number: pending.question.sequence_number,
                });
            }
        }
        self.pending = None;

        if self.tracker.budget_exhausted() {
            self.end();
            return Ok(None);
        }

        let corpus = Arc::clone(&self.corpus);
        let Some(index) = draw_index(&mut self.used, corpus.len(), &mut self.rng) else {
            self.end();
            return Ok(None);
        };

        let entry = &corpus.entries()[index];
        let direction = resolve_direction(self.settings.mode, &mut self.rng);
        let (prompt, answer) = entry.prompt_and_answer(direction);
        let pool = corpus.answer_pool(direction);

        let choices = build_choices(answer, &pool, &mut self.rng).inspect_err(|e| {
            tracing::warn!(index, %direction, "could not build question: {e}");
        })?;

        let question = Question {
            sequence_number: self.tracker.next_sequence_number(),
            direction,
            prompt: prompt.to_string(),
            correct_answer: answer.to_string(),
        };
        self.tracker.mark_presented();

        let rendered = RenderedQuestion {
            sequence_number: question.sequence_number,
            direction,
            prompt: question.prompt.clone(),
            choices,
        };
        self.pending = Some(PendingQuestion {
            question,
            resolved: false,
        });
        Ok(Some(rendered))
    }

    fn unresolved(&mut self) -> DrillResult<&mut PendingQuestion> {
        let pending = self.pending.as_mut().ok_or(DrillError::NoPendingQuestion)?;
        if pending.resolved {
            return Err(DrillError::AlreadyResolved {
                sequence_number: pending.question.sequence_number,
            });
        }
        Ok(pending)
    }

    /// Resolve the current question with the chosen text.
    pub fn answer(&mut self, selected: &str) -> DrillResult<Outcome> {
        let question = self.unresolved()?.question.clone();
        let outcome = self.tracker.record_answer(&question, selected)?;
        self.mark_resolved();
        Ok(outcome)
    }

    /// Resolve the current question as skipped.
    pub fn skip(&mut self) -> DrillResult<Outcome> {
        let question = self.unresolved()?.question.clone();
        let outcome = self.tracker.record_skip(&question)?;
        self.mark_resolved();
        Ok(outcome)
    }

    fn mark_resolved(&mut self) {
        if let Some(pending) = self.pending.as_mut() {
            pending.resolved = true;
        }
    }

    pub fn summary(&self) -> SessionSummary {
        self.tracker.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::parse;
    use crate::model::OutcomeStatus;
    use std::collections::HashSet;

    const FOUR: &str = "gatto\tcat\ncane\tdog\ncasa\thouse\nsole\tsun\n";

    fn drill(raw: &str, mode: DirectionMode, count: usize, seed: u64) -> Drill {
        let corpus = Arc::new(parse(raw).unwrap());
        Drill::with_seed(
            corpus,
            DrillSettings {
                mode,
                question_count: count,
            },
            Some(seed),
        )
    }

    fn ten_entries() -> String {
        (0..10).map(|i| format!("term{i}\tmeaning{i}\n")).collect()
    }

    #[test]
    fn questions_require_start() {
        let mut d = drill(FOUR, DirectionMode::NativeToTarget, 4, 1);
        assert_eq!(d.phase(), SessionPhase::NotStarted);
        assert!(matches!(d.next_question(), Err(DrillError::NotStarted)));
    }

    #[test]
    fn perfect_run_over_four_entries() {
        let mut d = drill(FOUR, DirectionMode::NativeToTarget, 4, 3);
        d.start();

        let terms: HashSet<&str> = ["gatto", "cane", "casa", "sole"].into();
        let mut meanings = vec!["cat", "dog", "house", "sun"];
        meanings.sort();
        let mut prompts = HashSet::new();

        let mut asked = 0;
        while let Some(q) = d.next_question().unwrap() {
            asked += 1;
            assert_eq!(q.sequence_number, asked);
            assert!(terms.contains(q.prompt.as_str()));
            assert!(prompts.insert(q.prompt.clone()));
            let mut choices = q.choices.clone();
            choices.sort();
            assert_eq!(choices, meanings);

            let answer = d.current_question().unwrap().correct_answer.clone();
            let outcome = d.answer(&answer).unwrap();
            assert_eq!(outcome.status, OutcomeStatus::Correct);
        }

        assert_eq!(asked, 4);
        assert!(d.is_finished());
        let summary = d.summary();
        assert_eq!(summary.final_score, 4);
        assert_eq!(summary.total_questions, 4);
        assert_eq!(summary.attempted_accuracy, 100);
    }

    #[test]
    fn skipping_everything_scores_zero() {
        let mut d = drill(FOUR, DirectionMode::NativeToTarget, 4, 5);
        d.start();
        while d.next_question().unwrap().is_some() {
            d.skip().unwrap();
        }
        let summary = d.summary();
        assert_eq!(summary.final_score, 0);
        assert_eq!(summary.total_questions, 4);
        assert_eq!(summary.skipped_count, 4);
        assert_eq!(summary.not_reached_count, 0);
        assert_eq!(summary.attempted_accuracy, 0);
    }

    #[test]
    fn budget_is_capped_to_corpus() {
        let mut d = drill(&ten_entries(), DirectionMode::Mixed, 15, 9);
        assert_eq!(d.total_questions(), 10);
        d.start();
        let mut asked = 0;
        while d.next_question().unwrap().is_some() {
            d.answer("nope").unwrap();
            asked += 1;
        }
        assert_eq!(asked, 10);
        assert_eq!(d.summary().incorrect_count, 10);
        assert_eq!(d.summary().not_reached_count, 0);
    }

    #[test]
    fn session_stops_at_budget() {
        let mut d = drill(&ten_entries(), DirectionMode::NativeToTarget, 3, 2);
        d.start();
        let mut asked = 0;
        while d.next_question().unwrap().is_some() {
            d.skip().unwrap();
            asked += 1;
        }
        assert_eq!(asked, 3);
        assert!(d.is_finished());
    }

    #[test]
    fn early_end_counts_not_reached() {
        let mut d = drill(&ten_entries(), DirectionMode::NativeToTarget, 8, 4);
        d.start();
        d.next_question().unwrap().unwrap();
        d.skip().unwrap();
        d.next_question().unwrap().unwrap();
        d.answer("meaning0").unwrap();
        d.next_question().unwrap().unwrap();
        d.end();

        assert!(d.is_finished());
        assert_eq!(d.next_question().unwrap(), None);
        assert!(matches!(d.skip(), Err(DrillError::NoPendingQuestion)));

        let summary = d.summary();
        assert_eq!(d.outcomes().len(), 2);
        assert_eq!(summary.not_reached_count, 6);
        assert_eq!(
            summary.not_reached_count,
            summary.total_questions - d.outcomes().len()
        );
    }

    #[test]
    fn double_fire_is_rejected() {
        let mut d = drill(FOUR, DirectionMode::NativeToTarget, 4, 6);
        d.start();
        d.next_question().unwrap().unwrap();
        let answer = d.current_question().unwrap().correct_answer.clone();
        d.answer(&answer).unwrap();
        assert!(matches!(
            d.answer(&answer),
            Err(DrillError::AlreadyResolved { sequence_number: 1 })
        ));
        assert!(d.skip().is_err());
        assert_eq!(d.score(), 1);
        assert_eq!(d.outcomes().len(), 1);
    }

    #[test]
    fn unresolved_question_blocks_next() {
        let mut d = drill(FOUR, DirectionMode::NativeToTarget, 4, 6);
        d.start();
        d.next_question().unwrap().unwrap();
        assert!(matches!(
            d.next_question(),
            Err(DrillError::QuestionPending { sequence_number: 1 })
        ));
    }

    #[test]
    fn answer_without_question_fails() {
        let mut d = drill(FOUR, DirectionMode::NativeToTarget, 4, 6);
        d.start();
        assert!(matches!(d.answer("cat"), Err(DrillError::NoPendingQuestion)));
    }

    #[test]
    fn target_to_native_prompts_with_meaning() {
        let mut d = drill(FOUR, DirectionMode::TargetToNative, 4, 8);
        d.start();
        let q = d.next_question().unwrap().unwrap();
        assert!(["cat", "dog", "house", "sun"].contains(&q.prompt.as_str()));
        assert!(q.choices.iter().all(|c| {
            ["gatto", "cane", "casa", "sole"].contains(&c.as_str())
        }));
        assert_eq!(q.direction, Direction::TargetToNative);
    }

    #[test]
    fn homogeneous_corpus_fails_question_but_keeps_index_consumed() {
        // Every meaning is the same, so no distractors exist.
        let raw = "a\tsame\nb\tsame\nc\tsame\nd\tsame\n";
        let mut d = drill(raw, DirectionMode::NativeToTarget, 4, 1);
        d.start();
        for _ in 0..4 {
            assert!(matches!(
                d.next_question(),
                Err(DrillError::InsufficientDistractors { available: 0, .. })
            ));
        }
        assert_eq!(d.next_question().unwrap(), None);
        assert!(d.is_finished());
        assert_eq!(d.summary().not_reached_count, 4);
    }

    #[test]
    fn restart_resets_everything() {
        let mut d = drill(FOUR, DirectionMode::NativeToTarget, 4, 10);
        d.start();
        while d.next_question().unwrap().is_some() {
            let answer = d.current_question().unwrap().correct_answer.clone();
            d.answer(&answer).unwrap();
        }
        assert_eq!(d.score(), 4);

        d.restart();
        assert_eq!(d.phase(), SessionPhase::InProgress);
        assert_eq!(d.score(), 0);
        assert!(d.outcomes().is_empty());
        let q = d.next_question().unwrap().unwrap();
        assert_eq!(q.sequence_number, 1);
    }

    #[test]
    fn same_seed_same_session() {
        let run = |seed| {
            let mut d = drill(&ten_entries(), DirectionMode::Mixed, 5, seed);
            d.start();
            let mut seen = Vec::new();
            while let Some(q) = d.next_question().unwrap() {
                seen.push((q.prompt.clone(), q.choices.clone()));
                d.skip().unwrap();
            }
            seen
        };
        assert_eq!(run(77), run(77));
    }
}
