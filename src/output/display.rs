//! Display functions for command results

use super::formatters::{create_progress_bar, outcome_to_emoji};
use crate::commands::{AnalysisResult, BenchmarkResult, PrepareSummary, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {} {}",
            i + 1,
            step.word.to_uppercase(),
            outcome_to_emoji(step.outcome),
            step.outcome.to_string().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.in_corpus {
        println!("\n{}", "⚠ not in the corpus".yellow());
    }
    println!("\n📊 Against {} possible words:", result.total_candidates);
    println!(
        "   Score:       {}",
        result.score.to_string().bright_yellow()
    );
    println!("   Outcomes:    {} distinct", result.groups);
    println!("   Worst case:  {} words remain", result.largest_group);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Mean guesses:     {}",
        format!("{:.2}", result.mean()).bright_yellow().bold()
    );
    println!("   Median guesses:   {}", result.median());
    println!(
        "   Best case:        {}",
        result.min_guesses().to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses().to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guesses, &count) in &result.distribution {
        let pct = count as f64 / result.solved.max(1) as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failed.is_empty() {
        println!("\n😰 {}", "Not solved:".red().bold());
        for word in result.failed.iter().take(10) {
            println!("   {}", word.to_uppercase().red());
        }
    }
}

/// Print the outcome of corpus preparation
pub fn print_prepare_summary(summary: &PrepareSummary) {
    println!(
        "{} {} of {} allowed words found among {} n-gram records",
        "✓".green().bold(),
        summary.corpus_words,
        summary.allowed_words,
        summary.ngram_records
    );
}
