//! Corpus preparation
//!
//! Joins a raw `word,count` n-gram frequency CSV with a list of allowed
//! guesses and writes the corpus file the solver loads, sorted by word.

use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// What a preparation run produced
pub struct PrepareSummary {
    pub allowed_words: usize,
    pub ngram_records: usize,
    pub corpus_words: usize,
}

/// Build the corpus file from an n-gram CSV and an allowed-guess list
///
/// # Errors
///
/// Returns an error if an input cannot be read, an allowed word has a
/// non-integer count, or the output cannot be written.
pub fn prepare_corpus(ngrams: &Path, allowed: &Path, output: &Path) -> Result<PrepareSummary> {
    let allowed_text = fs::read_to_string(allowed)
        .with_context(|| format!("reading allowed words from {}", allowed.display()))?;
    let ngram_text = fs::read_to_string(ngrams)
        .with_context(|| format!("reading n-gram frequencies from {}", ngrams.display()))?;

    let allowed_words = read_allowed_words(&allowed_text);
    let records = filter_records(&ngram_text, &allowed_words)?;

    let mut csv = String::new();
    for (word, count) in &records {
        writeln!(csv, "{word},{count}")?;
    }
    fs::write(output, csv).with_context(|| format!("writing corpus to {}", output.display()))?;

    log::info!("{} has been created with {} words", output.display(), records.len());

    Ok(PrepareSummary {
        allowed_words: allowed_words.len(),
        ngram_records: ngram_text.lines().filter(|l| !l.trim().is_empty()).count(),
        corpus_words: records.len(),
    })
}

/// One allowed word per line
fn read_allowed_words(text: &str) -> FxHashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Keep the allowed records, sorted by word
///
/// Anything whose word is not allowed (including a header row) is dropped.
/// Duplicate words keep their first record.
fn filter_records(ngram_text: &str, allowed: &FxHashSet<String>) -> Result<Vec<(String, u64)>> {
    let mut seen = FxHashSet::default();
    let mut records = Vec::new();

    for (idx, line) in ngram_text.lines().enumerate() {
        let Some((word, count)) = line.trim().split_once(',') else {
            continue;
        };
        let word = word.trim();
        if !allowed.contains(word) || !seen.insert(word.to_string()) {
            continue;
        }
        let Ok(count) = count.trim().parse::<u64>() else {
            bail!("line {}: bad count '{}' for '{word}'", idx + 1, count.trim());
        };
        records.push((word.to_string(), count));
    }

    records.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(records)
}
