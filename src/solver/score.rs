//! Weighted partition scoring
//!
//! A guess splits the possible secrets into groups by the outcome each secret
//! would produce. The score of a guess is
//!
//! ```text
//! Score(g) = Σ_o count(o) × weight(o)
//! ```
//!
//! where `count(o)` is the number of candidates in group `o` and `weight(o)`
//! their summed frequency. It is proportional to the frequency-weighted
//! expected number of candidates left after guessing `g`. Lower is better.
//!
//! Group weights are summed in `u128`, which cannot overflow for any slice of
//! `u64` weights that fits in memory. Products and the total use `BigUint`.

use crate::core::{Outcome, Word};
use num_bigint::BigUint;
use rayon::prelude::*;

/// How a guess splits a candidate set
#[derive(Debug, Clone)]
pub struct Partition {
    counts: [u64; Outcome::COUNT],
    weights: [u128; Outcome::COUNT],
}

impl Partition {
    /// Group `candidates` by their outcome against `guess`
    ///
    /// A candidate spelled exactly like the guess is left out: guessing it ends the game.
    #[must_use]
    pub fn new(guess: &Word, candidates: &[Word]) -> Self {
        let mut counts = [0u64; Outcome::COUNT];
        let mut weights = [0u128; Outcome::COUNT];

        for candidate in candidates {
            if candidate.chars() == guess.chars() {
                continue;
            }
            let idx = Outcome::calculate(guess, candidate).index();
            counts[idx] += 1;
            weights[idx] += u128::from(candidate.weight());
        }

        Self { counts, weights }
    }

    /// Count×weight score of this partition
    #[must_use]
    pub fn score(&self) -> BigUint {
        let mut total = BigUint::default();
        for (&count, &weight) in self.counts.iter().zip(&self.weights) {
            if count > 0 {
                total += BigUint::from(weight) * count;
            }
        }
        total
    }

    /// Number of non-empty groups
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Size of the largest group (worst case remaining)
    #[must_use]
    pub fn largest_group(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Number of candidates in the group for `outcome`
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> u64 {
        self.counts[outcome.index()]
    }

    /// Summed weight of the group for `outcome`
    #[must_use]
    pub fn weight(&self, outcome: Outcome) -> u128 {
        self.weights[outcome.index()]
    }
}

/// Score a single guess against the candidates
///
/// # Examples
/// ```
/// use num_bigint::BigUint;
/// use wordle_heuristic::core::Word;
/// use wordle_heuristic::solver::score::score_guess;
///
/// let candidates = vec![
///     Word::with_weight("ample", 2).unwrap(),
///     Word::with_weight("peach", 3).unwrap(),
/// ];
/// // Every candidate lands in its own group: 1×2 + 1×3
/// let guess = Word::new("apple").unwrap();
/// assert_eq!(score_guess(&guess, &candidates), BigUint::from(5u32));
/// ```
#[must_use]
pub fn score_guess(guess: &Word, candidates: &[Word]) -> BigUint {
    Partition::new(guess, candidates).score()
}

/// Select the guess with the lowest score
///
/// Scores are computed in parallel and joined before the minimum is chosen,
/// so equal scores always resolve to the earliest word in `guess_pool`.
/// Returns `None` if the guess pool is empty.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Word],
    candidates: &[Word],
) -> Option<(&'a Word, BigUint)> {
    let scores: Vec<BigUint> = guess_pool
        .par_iter()
        .map(|guess| score_guess(guess, candidates))
        .collect();

    let mut best: Option<(&'a Word, BigUint)> = None;
    for (guess, score) in guess_pool.iter().zip(scores) {
        if best.as_ref().is_none_or(|(_, min)| score < *min) {
            best = Some((guess, score));
        }
    }
    best
}
