//! Question selection without replacement.

use std::collections::HashSet;

use rand::Rng;

use crate::model::{Direction, DirectionMode};

/// Corpus positions already used in the current session.
#[derive(Debug, Clone, Default)]
pub struct UsedIndexSet {
    used: HashSet<usize>,
}

impl UsedIndexSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.used.contains(&index)
    }

    /// Forget every consumed position.
    pub fn reset(&mut self) {
        self.used.clear();
    }
}

/// Number of questions a session can actually pose.
///
/// No entry repeats within a session, so the budget is capped by the corpus.
pub fn effective_question_count(requested: usize, corpus_size: usize) -> usize {
    requested.min(corpus_size)
}

/// Draw an unused position in `[0, corpus_size)` and mark it used.
///
/// Uses rejection sampling. Returns `None` once every position is consumed.
pub fn draw_index<R: Rng + ?Sized>(
    used: &mut UsedIndexSet,
    corpus_size: usize,
    rng: &mut R,
) -> Option<usize> {
    if corpus_size == 0 || used.len() >= corpus_size {
        return None;
    }
    loop {
        let index = rng.random_range(0..corpus_size);
        if used.used.insert(index) {
            tracing::trace!(index, used = used.len(), "drew corpus index");
            return Some(index);
        }
    }
}

/// Pick the prompt direction for the next question.
///
/// `Mixed` flips a fair coin each call with no memory of earlier picks.
pub fn resolve_direction<R: Rng + ?Sized>(mode: DirectionMode, rng: &mut R) -> Direction {
    match mode {
        DirectionMode::NativeToTarget => Direction::NativeToTarget,
        DirectionMode::TargetToNative => Direction::TargetToNative,
        DirectionMode::Mixed => {
            if rng.random_bool(0.5) {
                Direction::NativeToTarget
            } else {
                Direction::TargetToNative
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn effective_count_caps_at_corpus() {
        assert_eq!(effective_question_count(15, 10), 10);
        assert_eq!(effective_question_count(5, 10), 5);
        assert_eq!(effective_question_count(0, 10), 0);
    }

    #[test]
    fn draws_exhaust_corpus_without_repeats() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in [4usize, 5, 17, 64] {
            let mut used = UsedIndexSet::new();
            let mut seen = HashSet::new();
            for _ in 0..size {
                let idx = draw_index(&mut used, size, &mut rng).unwrap();
                assert!(idx < size);
                assert!(seen.insert(idx), "index {idx} drawn twice");
            }
            assert_eq!(seen.len(), size);
            assert_eq!(draw_index(&mut used, size, &mut rng), None);
            assert_eq!(used.len(), size);
        }
    }

    #[test]
    fn reset_makes_positions_available_again() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut used = UsedIndexSet::new();
        while draw_index(&mut used, 4, &mut rng).is_some() {}
        used.reset();
        assert!(used.is_empty());
        assert!(draw_index(&mut used, 4, &mut rng).is_some());
    }

    #[test]
    fn empty_corpus_never_draws() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(draw_index(&mut UsedIndexSet::new(), 0, &mut rng), None);
    }

    #[test]
    fn fixed_modes_ignore_rng() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            assert_eq!(
                resolve_direction(DirectionMode::NativeToTarget, &mut rng),
                Direction::NativeToTarget
            );
            assert_eq!(
                resolve_direction(DirectionMode::TargetToNative, &mut rng),
                Direction::TargetToNative
            );
        }
    }

    #[test]
    fn mixed_mode_produces_both_directions() {
        let mut rng = StdRng::seed_from_u64(11);
        let native = (0..2000)
            .filter(|_| {
                resolve_direction(DirectionMode::Mixed, &mut rng) == Direction::NativeToTarget
            })
            .count();
        assert!(
            (800..1200).contains(&native),
            "expected roughly half native prompts, got {native}/2000"
        );
    }
}
