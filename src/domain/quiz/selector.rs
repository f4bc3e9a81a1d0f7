//! Random question selection for quiz turns.

use crate::domain::error::{TriviaError, TriviaResult};
use crate::domain::model::Question;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// How hard the selector tries to avoid previously-served questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Sample from the whole pool; redraw at most `budget` times while the pick is a
    /// repeat. The last draw is returned even if it is still a repeat.
    Retry { budget: u32 },
    /// Drop previously-served questions from the pool before sampling.
    Exclude,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        SelectionPolicy::Retry { budget: 1 }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QuizSelector {
    policy: SelectionPolicy,
}

impl QuizSelector {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    /// Picks the next question from `candidates`.
    ///
    /// Returns [`TriviaError::Exhausted`] when the pool is empty or when the client
    /// reports as many previous questions as the pool holds.
    pub fn select<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Question],
        previous: &[i32],
        rng: &mut R,
    ) -> TriviaResult<&'a Question> {
        if candidates.is_empty() || previous.len() == candidates.len() {
            return Err(TriviaError::Exhausted);
        }
        let seen: HashSet<i32> = previous.iter().copied().collect();

        match self.policy {
            SelectionPolicy::Retry { budget } => {
                let mut pick = candidates.choose(rng).ok_or(TriviaError::Exhausted)?;
                for _ in 0..budget {
                    if !seen.contains(&pick.id) {
                        break;
                    }
                    pick = candidates.choose(rng).ok_or(TriviaError::Exhausted)?;
                }
                Ok(pick)
            }
            SelectionPolicy::Exclude => {
                let pool: Vec<&Question> = candidates
                    .iter()
                    .filter(|q| !seen.contains(&q.id))
                    .collect();
                pool.choose(rng).copied().ok_or(TriviaError::Exhausted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(ids: &[i32]) -> Vec<Question> {
        ids.iter()
            .map(|&id| Question {
                id,
                question: format!("question {}", id),
                answer: format!("answer {}", id),
                category: 4,
                difficulty: 2,
            })
            .collect()
    }

    #[test]
    fn empty_pool_is_exhausted() {
        let selector = QuizSelector::default();
        let mut rng = StdRng::seed_from_u64(7);
        let err = selector.select(&[], &[], &mut rng).unwrap_err();
        assert!(matches!(err, TriviaError::Exhausted));
    }

    #[test]
    fn all_served_is_exhausted() {
        let candidates = pool(&[5, 9]);
        let mut rng = StdRng::seed_from_u64(7);
        for policy in [SelectionPolicy::default(), SelectionPolicy::Exclude] {
            let err = QuizSelector::new(policy)
                .select(&candidates, &[5, 9], &mut rng)
                .unwrap_err();
            assert!(matches!(err, TriviaError::Exhausted));
        }
    }

    #[test]
    fn exclude_never_repeats() {
        let candidates = pool(&[5, 9, 12, 23]);
        let selector = QuizSelector::new(SelectionPolicy::Exclude);
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pick = selector.select(&candidates, &[5, 9, 12], &mut rng).unwrap();
            assert_eq!(pick.id, 23);
        }
    }

    #[test]
    fn exclude_reports_exhaustion_when_previous_covers_pool_with_extras() {
        // Previous ids from other categories pad the count without covering the pool.
        let candidates = pool(&[5, 9]);
        let selector = QuizSelector::new(SelectionPolicy::Exclude);
        let mut rng = StdRng::seed_from_u64(1);
        let err = selector
            .select(&candidates, &[5, 9, 100], &mut rng)
            .unwrap_err();
        assert!(matches!(err, TriviaError::Exhausted));
    }

    #[test]
    fn retry_with_large_budget_avoids_previous() {
        let candidates = pool(&[5, 9, 12]);
        let selector = QuizSelector::new(SelectionPolicy::Retry { budget: 256 });
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pick = selector.select(&candidates, &[5, 9], &mut rng).unwrap();
            assert_eq!(pick.id, 12);
        }
    }

    #[test]
    fn retry_result_always_comes_from_pool() {
        let candidates = pool(&[1, 2, 3, 4, 5]);
        let selector = QuizSelector::default();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pick = selector.select(&candidates, &[1, 2], &mut rng).unwrap();
            assert!(candidates.iter().any(|q| q.id == pick.id));
        }
    }

    #[test]
    fn zero_budget_is_a_single_draw() {
        let candidates = pool(&[1, 2]);
        let selector = QuizSelector::new(SelectionPolicy::Retry { budget: 0 });
        let mut saw_repeat = false;
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            if selector.select(&candidates, &[1], &mut rng).unwrap().id == 1 {
                saw_repeat = true;
            }
        }
        assert!(saw_repeat);
    }
}
