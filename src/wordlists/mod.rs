//! Word corpus for Wordle solving
//!
//! The corpus is loaded once at startup and never mutated afterwards.

pub mod loader;

use crate::core::Word;
use crate::error::SolverError;

/// Default location of the corpus file
pub const DEFAULT_CORPUS_PATH: &str = "data/5-letter-words.csv";

/// The full, ordered list of guessable words with their frequency weights
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<Word>,
}

impl Corpus {
    /// Wrap a non-empty word list
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, SolverError> {
        if words.is_empty() {
            return Err(SolverError::InvalidInput(
                "corpus contains no words".to_string(),
            ));
        }
        Ok(Self { words })
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: an empty corpus cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Find a word by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.text() == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::corpus_from_pairs;

    #[test]
    fn empty_corpus_rejected() {
        assert!(matches!(
            Corpus::new(Vec::new()),
            Err(SolverError::InvalidInput(_))
        ));
    }

    #[test]
    fn find_by_text() {
        let corpus = corpus_from_pairs(&[("apple", u64::MAX), ("peach", 1)]).unwrap();

        assert_eq!(corpus.find("peach").map(Word::weight), Some(1));
        assert!(corpus.find("lemon").is_none());
        assert!(!corpus.is_empty());
    }
}
