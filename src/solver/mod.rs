//! Wordle solving algorithms
//!
//! The heuristic solver, its scoring, and the first-guess cache.

pub mod cache;
mod engine;
pub mod score;

pub use cache::{CacheKind, FileCache, FirstGuessCache, NoCache};
pub use engine::HeuristicSolver;

use crate::core::{Outcome, Word};
use crate::error::SolverError;

/// A solver driven by guess/outcome rounds
pub trait WordleSolver {
    /// Best next guess for the current state
    ///
    /// # Errors
    /// Returns `SolverError::ExhaustedCandidates` if no word is consistent
    /// with the outcomes seen so far.
    fn next_guess(&self) -> Result<&Word, SolverError>;

    /// Narrow the possible words to those that would have produced `outcome` for `guess`
    fn add_result(&mut self, guess: &Word, outcome: Outcome);

    /// Number of words still possible
    fn remaining(&self) -> usize;
}

/// A solver that can start a new game without being rebuilt
pub trait ResettableSolver: WordleSolver {
    fn reset(&mut self);
}
