//! Wordle feedback computation and representation
//!
//! An outcome holds one tag per letter position:
//! - `N` = `NotPresent` (letter not in the secret, or all copies already accounted for)
//! - `P` = `Present` (letter in the secret, wrong position)
//! - `C` = `Correct` (letter in the right position)
//!
//! Internally the outcome is a single base-3 number (0-242) where position `i`
//! contributes `tag × 3^i`, so it can index dense partition tables directly.

use super::word::{WORD_LENGTH, Word};
use crate::error::SolverError;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    NotPresent = 0,
    Present = 1,
    Correct = 2,
}

impl Tag {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::NotPresent,
        }
    }

    /// Protocol letter for this tag
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::NotPresent => 'N',
            Self::Present => 'P',
            Self::Correct => 'C',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome(u8);

impl Outcome {
    /// Number of distinct outcomes (3^5)
    pub const COUNT: usize = 243;

    /// Every position correct: the guess was the secret
    pub const SOLVED: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Build an outcome from per-position tags
    #[must_use]
    pub fn from_tags(tags: [Tag; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for tag in tags {
            value += tag as u8 * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(value)
    }

    /// Build an outcome from its dense index
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if `index >= Outcome::COUNT`.
    pub fn from_index(index: usize) -> Result<Self, SolverError> {
        u8::try_from(index)
            .ok()
            .filter(|&v| usize::from(v) < Self::COUNT)
            .map(Self)
            .ok_or_else(|| SolverError::InvalidInput(format!("outcome index {index} out of range")))
    }

    /// Dense index in `0..Outcome::COUNT`
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Per-position tags
    #[must_use]
    pub fn tags(self) -> [Tag; WORD_LENGTH] {
        let mut tags = [Tag::NotPresent; WORD_LENGTH];
        let mut val = self.0;
        for tag in &mut tags {
            *tag = Tag::from_digit(val % 3);
            val /= 3;
        }
        tags
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 == Self::SOLVED.0
    }

    /// Calculate the outcome of guessing `guess` when `secret` is the answer
    ///
    /// Both words are validated at construction, so this cannot fail.
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristic::core::{Outcome, Word};
    ///
    /// let guess = Word::new("apple").unwrap();
    /// let secret = Word::new("allee").unwrap();
    /// assert_eq!(Outcome::calculate(&guess, &secret).to_string(), "CNNPC");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        score_bytes(guess.chars(), secret.chars())
    }
}

/// Two-pass feedback over raw bytes
///
/// Exact matches are taken out of the pool first; a repeated guess letter is
/// then marked present at most as many times as it remains unmatched in the secret.
// Allow: index needed to compare guess[i] with secret[i] and set tags[i]
#[allow(clippy::needless_range_loop)]
fn score_bytes(guess: &[u8; WORD_LENGTH], secret: &[u8; WORD_LENGTH]) -> Outcome {
    let mut tags = [Tag::NotPresent; WORD_LENGTH];
    let mut remaining = [0u8; 256];

    for i in 0..WORD_LENGTH {
        if guess[i] == secret[i] {
            tags[i] = Tag::Correct;
        } else {
            remaining[usize::from(secret[i])] += 1;
        }
    }

    for i in 0..WORD_LENGTH {
        if tags[i] == Tag::Correct {
            continue;
        }
        let count = &mut remaining[usize::from(guess[i])];
        if *count > 0 {
            tags[i] = Tag::Present;
            *count -= 1;
        }
    }

    Outcome::from_tags(tags)
}

/// Compute the outcome for two raw strings
///
/// Both strings go through the same validation and case folding as [`Word::new`].
///
/// # Errors
/// Returns `SolverError::InvalidInput` unless both strings are exactly five
/// ASCII letters.
///
/// # Examples
/// ```
/// use wordle_heuristic::core::compute_outcome;
///
/// let outcome = compute_outcome("apple", "apric").unwrap();
/// assert_eq!(outcome.to_string(), "CCNNN");
/// assert!(compute_outcome("apple", "pear").is_err());
/// ```
pub fn compute_outcome(guess: &str, secret: &str) -> Result<Outcome, SolverError> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    Ok(Outcome::calculate(&guess, &secret))
}

/// Parse a protocol string such as `"CPNNC"`
///
/// # Errors
/// Returns `SolverError::InvalidInput` if the string is not five characters
/// from `{C, P, N}`.
///
/// # Examples
/// ```
/// use wordle_heuristic::core::{Outcome, parse_outcome};
///
/// assert_eq!(parse_outcome("CCCCC").unwrap(), Outcome::SOLVED);
/// assert!(parse_outcome("CCPXN").is_err());
/// ```
pub fn parse_outcome(s: &str) -> Result<Outcome, SolverError> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != WORD_LENGTH {
        return Err(SolverError::InvalidInput(format!(
            "outcome '{s}' must be exactly {WORD_LENGTH} characters"
        )));
    }

    let mut tags = [Tag::NotPresent; WORD_LENGTH];
    for (tag, ch) in tags.iter_mut().zip(chars) {
        *tag = match ch {
            'C' => Tag::Correct,
            'P' => Tag::Present,
            'N' => Tag::NotPresent,
            other => {
                return Err(SolverError::InvalidInput(format!(
                    "invalid character '{other}' in outcome '{s}'"
                )));
            }
        };
    }

    Ok(Outcome::from_tags(tags))
}

impl FromStr for Outcome {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_outcome(s)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in self.tags() {
            write!(f, "{}", tag.symbol())?;
        }
        Ok(())
    }
}
