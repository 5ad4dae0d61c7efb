//! Core domain types for Wordle
//!
//! Words, outcomes and the feedback rules. Everything here is pure and
//! independent of the solver.

mod outcome;
mod word;

pub use outcome::{Outcome, Tag, compute_outcome, parse_outcome};
pub use word::{WORD_LENGTH, Word};
