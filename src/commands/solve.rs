//! Word solving command
//!
//! Solves a known secret word and returns the solution path.

use crate::core::{Outcome, Word};
use crate::solver::ResettableSolver;
use anyhow::{Context, Result};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub outcome: Outcome,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `config.target` from a fresh game
///
/// The solver is reset first, so earlier games do not leak into this one.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters a-z)
/// - The solver runs out of candidates (the target is not in the corpus)
pub fn solve_word<S: ResettableSolver>(config: &SolveConfig, solver: &mut S) -> Result<SolveResult> {
    let target = Word::new(config.target.as_str()).context("invalid target word")?;
    solver.reset();

    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = solver.remaining();
        let guess = solver
            .next_guess()
            .with_context(|| format!("cannot solve '{target}'; is it in the corpus?"))?
            .clone();

        let outcome = Outcome::calculate(&guess, &target);
        solver.add_result(&guess, outcome);

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            outcome,
            candidates_before,
            candidates_after: solver.remaining(),
        });

        if outcome.is_solved() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target.text().to_string(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target.text().to_string(),
    })
}
