//! Heuristic Wordle solver

use super::cache::FirstGuessCache;
use super::score::{score_guess, select_best_guess};
use super::{ResettableSolver, WordleSolver};
use crate::core::{Outcome, Word};
use crate::error::SolverError;
use crate::wordlists::Corpus;
use num_bigint::BigUint;
use std::time::Instant;

/// Solver minimizing the weighted expected number of remaining candidates
///
/// Any corpus word may be guessed, not only the ones still possible, so every
/// scoring round costs `|corpus| × |possible|` outcome calculations.
pub struct HeuristicSolver<C: FirstGuessCache> {
    all_words: Corpus,
    possible_words: Vec<Word>,
    cache: C,
}

impl<C: FirstGuessCache> HeuristicSolver<C> {
    /// Create a solver over `corpus`, starting with every word possible
    pub fn new(corpus: Corpus, cache: C) -> Self {
        let possible_words = corpus.words().to_vec();
        Self {
            all_words: corpus,
            possible_words,
            cache,
        }
    }

    /// The full corpus
    #[must_use]
    pub const fn all_words(&self) -> &Corpus {
        &self.all_words
    }

    /// Words still consistent with every outcome seen so far
    #[must_use]
    pub fn possible_words(&self) -> &[Word] {
        &self.possible_words
    }

    /// Score `guess` against the current possible words
    #[must_use]
    pub fn score_guess(&self, guess: &Word) -> BigUint {
        score_guess(guess, &self.possible_words)
    }

    /// Possible words only ever shrink, so equal length means nothing was eliminated
    fn is_opening(&self) -> bool {
        self.possible_words.len() == self.all_words.len()
    }

    fn cached_opening(&self) -> Option<&Word> {
        let cached = match self.cache.try_read() {
            Ok(cached) => cached?,
            Err(e) => {
                log::warn!("ignoring first-guess cache: {e}");
                return None;
            }
        };

        let word = self.all_words.find(&cached);
        match word {
            Some(_) => log::debug!("using cached first guess '{cached}'"),
            None => log::warn!("cached first guess '{cached}' is not in the corpus, recomputing"),
        }
        word
    }
}

impl<C: FirstGuessCache> WordleSolver for HeuristicSolver<C> {
    fn next_guess(&self) -> Result<&Word, SolverError> {
        match self.possible_words.as_slice() {
            [] => return Err(SolverError::ExhaustedCandidates),
            [only] => return Ok(only),
            _ => {}
        }

        let opening = self.is_opening();
        if opening && let Some(word) = self.cached_opening() {
            return Ok(word);
        }

        let start = Instant::now();
        let (guess, score) = select_best_guess(self.all_words.words(), &self.possible_words)
            .ok_or(SolverError::ExhaustedCandidates)?;
        log::debug!(
            "scored {} guesses against {} candidates in {:.2?}: '{guess}' (score {score})",
            self.all_words.len(),
            self.possible_words.len(),
            start.elapsed()
        );

        if opening {
            match self.cache.write(guess.text()) {
                Ok(()) => log::info!("cached first guess '{guess}'"),
                Err(e) => log::warn!("could not cache first guess: {e}"),
            }
        }

        Ok(guess)
    }

    fn add_result(&mut self, guess: &Word, outcome: Outcome) {
        let before = self.possible_words.len();
        self.possible_words
            .retain(|candidate| Outcome::calculate(guess, candidate) == outcome);
        log::debug!(
            "'{guess}' -> {outcome}: {before} -> {} possible words",
            self.possible_words.len()
        );
    }

    fn remaining(&self) -> usize {
        self.possible_words.len()
    }
}

impl<C: FirstGuessCache> ResettableSolver for HeuristicSolver<C> {
    fn reset(&mut self) {
        self.possible_words.clear();
        self.possible_words.extend_from_slice(self.all_words.words());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_outcome;
    use crate::solver::cache::{FileCache, NoCache};
    use crate::wordlists::loader::corpus_from_pairs;
    use std::fs;
    use std::path::PathBuf;

    const FRUIT: [(&str, u64); 5] = [
        ("apple", 1),
        ("ample", 1),
        ("apric", 1),
        ("allee", 1),
        ("peach", 1),
    ];

    fn fruit_solver() -> HeuristicSolver<NoCache> {
        HeuristicSolver::new(corpus_from_pairs(&FRUIT).unwrap(), NoCache)
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn temp_cache(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "wordle_heuristic_engine_{name}_{}.txt",
            std::process::id()
        ))
    }

    /// Play until solved, returning the guesses made
    fn play(solver: &mut impl WordleSolver, secret: &Word, max_turns: usize) -> Vec<String> {
        let mut guesses = Vec::new();
        for _ in 0..max_turns {
            let guess = solver.next_guess().unwrap().clone();
            guesses.push(guess.text().to_string());
            let outcome = Outcome::calculate(&guess, secret);
            if outcome.is_solved() {
                break;
            }
            solver.add_result(&guess, outcome);
        }
        guesses
    }

    #[test]
    fn opening_guess_breaks_ties_by_corpus_order() {
        // APPLE and AMPLE both split the other four words into singletons
        let solver = fruit_solver();
        assert_eq!(solver.next_guess().unwrap().text(), "apple");
    }

    #[test]
    fn weights_change_the_choice() {
        let pairs = [("zzzzz", 1), ("apple", 1), ("ample", 1), ("apric", 1)];
        let solver = HeuristicSolver::new(corpus_from_pairs(&pairs).unwrap(), NoCache);
        assert_eq!(solver.next_guess().unwrap().text(), "apple");

        // A guess drops out of its own partition, so guessing a heavy word pays off
        let pairs = [("zzzzz", 0), ("apple", 0), ("ample", 5), ("apric", 5)];
        let solver = HeuristicSolver::new(corpus_from_pairs(&pairs).unwrap(), NoCache);
        assert_eq!(solver.next_guess().unwrap().text(), "ample");
        assert_eq!(solver.score_guess(&word("ample")), BigUint::from(5u32));
        assert_eq!(solver.score_guess(&word("apple")), BigUint::from(10u32));
        assert_eq!(solver.score_guess(&word("zzzzz")), BigUint::from(30u32));
    }

    #[test]
    fn solves_every_fruit() {
        let mut solver = fruit_solver();
        for (secret, _) in FRUIT {
            solver.reset();
            let guesses = play(&mut solver, &word(secret), FRUIT.len());
            assert!(guesses.len() <= FRUIT.len());
            assert_eq!(guesses.last().map(String::as_str), Some(secret));
        }
    }

    #[test]
    fn solves_apple_first_try() {
        let mut solver = fruit_solver();
        let guesses = play(&mut solver, &word("apple"), FRUIT.len());
        assert_eq!(guesses, ["apple"]);
    }

    #[test]
    fn single_candidate_returned_directly() {
        let mut solver = fruit_solver();
        solver.add_result(&word("apple"), parse_outcome("PPNNP").unwrap());

        assert_eq!(solver.remaining(), 1);
        assert_eq!(solver.next_guess().unwrap().text(), "peach");
    }

    #[test]
    fn add_result_is_monotonic_and_keeps_secret() {
        let corpus = corpus_from_pairs(&FRUIT).unwrap();
        for guess in corpus.words() {
            for secret in corpus.words() {
                let mut solver = fruit_solver();
                let before = solver.remaining();
                solver.add_result(guess, Outcome::calculate(guess, secret));

                assert!(solver.remaining() <= before);
                assert!(solver.possible_words().contains(secret));
            }
        }
    }

    #[test]
    fn guess_outside_corpus_filters() {
        let mut solver = fruit_solver();
        // No candidate contains any Z
        solver.add_result(&word("zzzzz"), parse_outcome("NNNNN").unwrap());
        assert_eq!(solver.remaining(), FRUIT.len());

        solver.add_result(&word("zzzzz"), parse_outcome("PNNNN").unwrap());
        assert_eq!(solver.remaining(), 0);
    }

    #[test]
    fn contradictory_feedback_exhausts_candidates() {
        let mut solver = fruit_solver();
        // Claim APRIC was right, then claim AMPLE was right too
        solver.add_result(&word("apric"), Outcome::SOLVED);
        assert_eq!(solver.remaining(), 1);
        solver.add_result(&word("ample"), Outcome::SOLVED);

        assert!(solver.possible_words().is_empty());
        assert!(matches!(
            solver.next_guess(),
            Err(SolverError::ExhaustedCandidates)
        ));
    }

    #[test]
    fn reset_restores_all_words() {
        let mut solver = fruit_solver();
        solver.add_result(&word("apple"), parse_outcome("CNCCC").unwrap());
        assert_eq!(solver.remaining(), 1);

        solver.reset();
        assert_eq!(solver.remaining(), FRUIT.len());
        assert_eq!(solver.possible_words(), solver.all_words().words());
    }

    #[test]
    fn reset_shares_corpus_text() {
        let mut solver = fruit_solver();
        solver.add_result(&word("mmmmm"), parse_outcome("NNNNN").unwrap());
        solver.reset();

        for (possible, corpus) in solver.possible_words().iter().zip(solver.all_words().words()) {
            assert_eq!(possible.text().as_ptr(), corpus.text().as_ptr());
        }
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let mut solver = fruit_solver();
        // Drops AMPLE, leaving four words to score
        solver.add_result(&word("mmmmm"), parse_outcome("NNNNN").unwrap());
        assert_eq!(solver.remaining(), 4);
        let first = solver.next_guess().unwrap().clone();
        for _ in 0..5 {
            assert_eq!(solver.next_guess().unwrap(), &first);
        }
    }

    #[test]
    fn cached_opening_skips_scoring() {
        let path = temp_cache("hit");
        fs::write(&path, "peach\n").unwrap();

        let solver = HeuristicSolver::new(
            corpus_from_pairs(&FRUIT).unwrap(),
            FileCache::new(&path),
        );
        let guess = solver.next_guess().unwrap().text().to_string();
        fs::remove_file(&path).unwrap();

        assert_eq!(guess, "peach");
    }

    #[test]
    fn computed_opening_is_written_to_cache() {
        let path = temp_cache("write");
        let _ = fs::remove_file(&path);

        let mut solver = HeuristicSolver::new(
            corpus_from_pairs(&FRUIT).unwrap(),
            FileCache::new(&path),
        );
        assert_eq!(solver.next_guess().unwrap().text(), "apple");
        let cached = fs::read_to_string(&path).unwrap();
        assert_eq!(cached, "apple");

        // Later rounds never overwrite the opening guess
        solver.add_result(&word("mmmmm"), parse_outcome("NNNNN").unwrap());
        solver.next_guess().unwrap();
        let cached = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(cached, "apple");
    }

    #[test]
    fn cached_word_outside_corpus_is_ignored() {
        let path = temp_cache("stale");
        fs::write(&path, "soare").unwrap();

        let solver = HeuristicSolver::new(
            corpus_from_pairs(&FRUIT).unwrap(),
            FileCache::new(&path),
        );
        let guess = solver.next_guess().unwrap().text().to_string();
        let cached = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(guess, "apple");
        assert_eq!(cached, "apple");
    }

    #[test]
    fn unusable_cache_falls_back_to_scoring() {
        let solver = HeuristicSolver::new(
            corpus_from_pairs(&FRUIT).unwrap(),
            FileCache::new(std::env::temp_dir()),
        );
        assert_eq!(solver.next_guess().unwrap().text(), "apple");
    }
}
