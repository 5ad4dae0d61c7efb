//! Wordle Solver
//!
//! A Wordle solver that picks the guess minimizing the frequency-weighted
//! expected number of remaining candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_heuristic::core::{Outcome, Word};
//! use wordle_heuristic::solver::{HeuristicSolver, NoCache, WordleSolver};
//! use wordle_heuristic::wordlists::loader::corpus_from_pairs;
//!
//! let corpus = corpus_from_pairs(&[("apple", 5), ("ample", 1), ("peach", 3)]).unwrap();
//! let mut solver = HeuristicSolver::new(corpus, NoCache);
//! let secret = Word::new("peach").unwrap();
//!
//! loop {
//!     let guess = solver.next_guess().unwrap().clone();
//!     let outcome = Outcome::calculate(&guess, &secret);
//!     if outcome.is_solved() {
//!         break;
//!     }
//!     solver.add_result(&guess, outcome);
//! }
//! ```

// Core domain types
pub mod core;

// Error type
pub mod error;

// Solving algorithms
pub mod solver;

// Corpus
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
