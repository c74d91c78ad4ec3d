//! Multiple-choice set construction.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{DrillError, DrillResult};

/// Choices shown per question.
pub const CHOICE_COUNT: usize = 4;

/// Wrong answers shown per question.
pub const DISTRACTOR_COUNT: usize = CHOICE_COUNT - 1;

/// Build the shuffled choice set for `correct`.
///
/// Candidates equal to `correct` are removed and the rest deduplicated
/// (first occurrence wins) before three are sampled without replacement.
/// The final order comes from a Fisher–Yates shuffle of all four, so the
/// correct answer is equally likely in every slot.
pub fn build_choices<R, S>(correct: &str, pool: &[S], rng: &mut R) -> DrillResult<Vec<String>>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut candidates: Vec<&str> = pool
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| *c != correct && seen.insert(*c))
        .collect();

    if candidates.len() < DISTRACTOR_COUNT {
        return Err(DrillError::InsufficientDistractors {
            available: candidates.len(),
            required: DISTRACTOR_COUNT,
        });
    }

    candidates.shuffle(rng);
    candidates.truncate(DISTRACTOR_COUNT);

    let mut choices: Vec<String> = Vec::with_capacity(CHOICE_COUNT);
    choices.push(correct.to_string());
    choices.extend(candidates.into_iter().map(str::to_string));
    choices.shuffle(rng);
    Ok(choices)
}
