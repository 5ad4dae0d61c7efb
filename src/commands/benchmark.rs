//! Benchmark command
//!
//! Solves many secrets in a row with one solver, resetting it between games.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::ResettableSolver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<String>,
    /// Number of solved secrets per attempt count
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

impl BenchmarkResult {
    /// Mean attempts over solved secrets
    #[must_use]
    pub fn mean(&self) -> f64 {
        let (attempts, words) = self
            .distribution
            .iter()
            .fold((0, 0), |(sum, n), (&attempts, &count)| {
                (sum + attempts * count, n + count)
            });
        if words == 0 {
            0.0
        } else {
            attempts as f64 / words as f64
        }
    }

    /// Attempt count at which half of the solved secrets are covered
    #[must_use]
    pub fn median(&self) -> usize {
        let mid = self.solved / 2;
        let mut seen = 0;
        for (&attempts, &count) in &self.distribution {
            seen += count;
            if seen >= mid {
                return attempts;
            }
        }
        0
    }

    #[must_use]
    pub fn min_guesses(&self) -> usize {
        self.distribution.keys().next().copied().unwrap_or(0)
    }

    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.distribution.keys().next_back().copied().unwrap_or(0)
    }

    #[must_use]
    pub fn words_per_second(&self) -> f64 {
        self.total_words as f64 / self.duration.as_secs_f64().max(f64::EPSILON)
    }
}

/// Draw `count` distinct secrets from the corpus
///
/// The same seed always yields the same sample.
#[must_use]
pub fn sample_secrets(words: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    let count = count.min(words.len());
    let sample = match seed {
        Some(seed) => words.choose_multiple(&mut StdRng::seed_from_u64(seed), count),
        None => words.choose_multiple(&mut rand::rng(), count),
    };
    sample.cloned().collect()
}

/// Solve every secret in `secrets`
///
/// A secret that is not solved within `max_guesses`, or that exhausts the
/// candidates, is recorded as failed.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_benchmark<S: ResettableSolver>(
    solver: &mut S,
    secrets: &[Word],
    max_guesses: usize,
) -> BenchmarkResult {
    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failed = Vec::new();
    let mut solved = 0;

    for secret in secrets {
        let mut config = SolveConfig::new(secret.text().to_string());
        config.max_guesses = max_guesses;

        match solve_word(&config, solver) {
            Ok(result) if result.success => {
                solved += 1;
                *distribution.entry(result.guesses.len()).or_insert(0) += 1;
            }
            Ok(_) => failed.push(secret.text().to_string()),
            Err(e) => {
                log::warn!("{e:#}");
                failed.push(secret.text().to_string());
            }
        }

        pb.set_message(format!("solved {solved}"));
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    BenchmarkResult {
        total_words: secrets.len(),
        solved,
        failed,
        distribution,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{HeuristicSolver, NoCache};
    use crate::wordlists::loader::corpus_from_pairs;

    const WORDS: [(&str, u64); 8] = [
        ("apple", 1),
        ("ample", 1),
        ("apric", 1),
        ("allee", 1),
        ("peach", 1),
        ("grape", 1),
        ("mango", 1),
        ("lemon", 1),
    ];

    fn result_with(distribution: &[(usize, usize)]) -> BenchmarkResult {
        let distribution: BTreeMap<usize, usize> = distribution.iter().copied().collect();
        let solved = distribution.values().sum();
        BenchmarkResult {
            total_words: solved,
            solved,
            failed: Vec::new(),
            distribution,
            duration: Duration::from_secs(1),
        }
    }

    #[test]
    fn benchmark_solves_every_word() {
        let corpus = corpus_from_pairs(&WORDS).unwrap();
        let secrets = corpus.words().to_vec();
        let mut solver = HeuristicSolver::new(corpus, NoCache);

        let result = run_benchmark(&mut solver, &secrets, 6);

        assert_eq!(result.total_words, 8);
        assert_eq!(result.solved, 8);
        assert!(result.failed.is_empty());
        assert_eq!(result.distribution.values().sum::<usize>(), 8);
        assert_eq!(result.min_guesses(), 1);
        assert!(result.max_guesses() <= 6);
        assert!(result.mean() >= 1.0);
    }

    #[test]
    fn unknown_secret_counts_as_failure() {
        let corpus = corpus_from_pairs(&WORDS).unwrap();
        let mut solver = HeuristicSolver::new(corpus, NoCache);
        let secrets = vec![Word::new("zzzzz").unwrap(), Word::new("lemon").unwrap()];

        let result = run_benchmark(&mut solver, &secrets, 6);

        assert_eq!(result.solved, 1);
        assert_eq!(result.failed, ["zzzzz"]);
    }

    #[test]
    fn mean_and_median() {
        // 1×1, 3×2, 4×3, 2×4 → 10 words, 27 attempts
        let result = result_with(&[(1, 1), (2, 3), (3, 4), (4, 2)]);
        assert!((result.mean() - 2.7).abs() < 1e-9);
        assert_eq!(result.median(), 3);
        assert_eq!(result.min_guesses(), 1);
        assert_eq!(result.max_guesses(), 4);
    }

    #[test]
    fn empty_result_statistics() {
        let result = result_with(&[]);
        assert!(result.mean().abs() < f64::EPSILON);
        assert_eq!(result.median(), 0);
        assert_eq!(result.min_guesses(), 0);
    }

    #[test]
    fn seeded_sample_is_reproducible() {
        let corpus = corpus_from_pairs(&WORDS).unwrap();

        let first = sample_secrets(corpus.words(), 4, Some(7));
        let second = sample_secrets(corpus.words(), 4, Some(7));
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);

        let mut texts: Vec<&str> = first.iter().map(Word::text).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), 4);
    }

    #[test]
    fn sample_is_capped_at_corpus_size() {
        let corpus = corpus_from_pairs(&WORDS).unwrap();
        assert_eq!(sample_secrets(corpus.words(), 100, None).len(), 8);
    }
}
