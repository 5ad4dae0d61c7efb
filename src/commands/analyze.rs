//! Word analysis command
//!
//! Reports how a single guess would split the current possible words.

use crate::core::Word;
use crate::solver::score::Partition;
use crate::solver::{FirstGuessCache, HeuristicSolver};
use anyhow::{Context, Result};
use num_bigint::BigUint;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub in_corpus: bool,
    pub score: BigUint,
    pub groups: usize,
    pub largest_group: u64,
    pub total_candidates: usize,
}

/// Analyze `word` as a guess against the solver's possible words
///
/// # Errors
///
/// Returns an error if the word is not 5 letters a-z.
pub fn analyze_word<C: FirstGuessCache>(
    word: &str,
    solver: &HeuristicSolver<C>,
) -> Result<AnalysisResult> {
    let guess = Word::new(word).context("invalid word")?;
    let partition = Partition::new(&guess, solver.possible_words());

    Ok(AnalysisResult {
        in_corpus: solver.all_words().find(guess.text()).is_some(),
        score: partition.score(),
        groups: partition.group_count(),
        largest_group: partition.largest_group(),
        total_candidates: solver.possible_words().len(),
        word: guess.text().to_string(),
    })
}
