//! Corpus loading utilities
//!
//! The corpus file is a headerless CSV with one `word,frequency` record per line.

use super::Corpus;
use crate::core::Word;
use crate::error::SolverError;
use std::fs;
use std::path::Path;

/// Load the corpus from a file
///
/// Record order is preserved; it decides how equal scores are broken.
///
/// # Errors
///
/// Returns `SolverError::CorpusLoad` if the file cannot be read, a record is
/// malformed, or the file holds no records.
///
/// # Examples
/// ```no_run
/// use wordle_heuristic::wordlists::loader::load_from_file;
///
/// let corpus = load_from_file("data/5-letter-words.csv").unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Corpus, SolverError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| SolverError::CorpusLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let corpus = parse_corpus(&content).map_err(|reason| SolverError::CorpusLoad {
        path: path.to_path_buf(),
        reason,
    })?;
    log::info!("Read {} words from {}", corpus.len(), path.display());
    Ok(corpus)
}

/// Parse corpus records from CSV text
///
/// On failure the error names the offending line.
pub(crate) fn parse_corpus(content: &str) -> Result<Corpus, String> {
    let mut words = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (text, frequency) = trimmed
            .split_once(',')
            .ok_or_else(|| format!("line {line_no}: expected 'word,frequency', got '{trimmed}'"))?;
        let weight: u64 = frequency.trim().parse().map_err(|e| {
            format!("line {line_no}: bad frequency '{}': {e}", frequency.trim())
        })?;
        let word = Word::with_weight(text.trim(), weight)
            .map_err(|e| format!("line {line_no}: {e}"))?;
        words.push(word);
    }

    Corpus::new(words).map_err(|e| e.to_string())
}

/// Build a corpus from in-memory `(word, weight)` pairs
///
/// # Errors
///
/// Returns `SolverError::InvalidInput` for an invalid word or an empty slice.
///
/// # Examples
/// ```
/// use wordle_heuristic::wordlists::loader::corpus_from_pairs;
///
/// let corpus = corpus_from_pairs(&[("apple", 10), ("peach", 3)]).unwrap();
/// assert_eq!(corpus.len(), 2);
/// assert_eq!(corpus.words()[1].weight(), 3);
/// ```
pub fn corpus_from_pairs(pairs: &[(&str, u64)]) -> Result<Corpus, SolverError> {
    let words = pairs
        .iter()
        .map(|&(text, weight)| Word::with_weight(text, weight))
        .collect::<Result<Vec<_>, _>>()?;
    Corpus::new(words)
}
