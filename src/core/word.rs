//! Wordle word representation
//!
//! A Word stores a validated 5-letter word together with its corpus frequency weight.

use crate::error::SolverError;
use std::fmt;
use std::sync::Arc;

/// Number of letters in every puzzle word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Wordle word with a frequency weight
///
/// The weight is the word's corpus frequency; guesses typed by a user that are
/// not part of the corpus carry a weight of zero. Clones share the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: Arc<str>,
    chars: [u8; WORD_LENGTH],
    weight: u64,
}

impl Word {
    /// Create a zero-weight word from a string
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` unless the text is exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristic::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.weight(), 0);
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, SolverError> {
        Self::with_weight(text, 0)
    }

    /// Create a word carrying a corpus frequency weight
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` unless the text is exactly five ASCII letters.
    pub fn with_weight(text: impl Into<String>, weight: u64) -> Result<Self, SolverError> {
        let text: String = text.into().to_ascii_lowercase();

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(SolverError::InvalidInput(format!(
                "word '{text}' must contain only the letters a-z"
            )));
        }

        let chars: [u8; WORD_LENGTH] = text.as_bytes().try_into().map_err(|_| {
            SolverError::InvalidInput(format!(
                "word '{text}' must be exactly {WORD_LENGTH} letters, got {}",
                text.len()
            ))
        })?;

        Ok(Self {
            text: text.into(),
            chars,
            weight,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Corpus frequency weight
    #[inline]
    #[must_use]
    pub const fn weight(&self) -> u64 {
        self.weight
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::with_weight("crane", 42).unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
        assert_eq!(word.weight(), 42);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(SolverError::InvalidInput(_))
        ));
        assert!(matches!(Word::new("shrt"), Err(SolverError::InvalidInput(_))));
        assert!(matches!(Word::new(""), Err(SolverError::InvalidInput(_))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err());
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cran!").is_err());
        // Five characters but more than five bytes
        assert!(Word::new("crané").is_err());
    }

    #[test]
    fn clones_share_text() {
        let word = Word::with_weight("crane", 7).unwrap();
        let copy = word.clone();
        assert_eq!(copy, word);
        assert_eq!(copy.text().as_ptr(), word.text().as_ptr());
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
