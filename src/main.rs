//! Wordle Solver - CLI
//!
//! Suggests guesses that minimize the frequency-weighted expected number of
//! remaining words, reading feedback from the console.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_heuristic::{
    commands::{
        SolveConfig, analyze_word, prepare_corpus, run_benchmark, run_simple, sample_secrets,
        solve_word,
    },
    output::{
        print_analysis_result, print_benchmark_result, print_prepare_summary, print_solve_result,
    },
    solver::{CacheKind, HeuristicSolver, cache::DEFAULT_CACHE_PATH},
    wordlists::{DEFAULT_CORPUS_PATH, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_heuristic",
    about = "Wordle solver minimizing the frequency-weighted expected number of remaining words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Corpus CSV with one `word,frequency` record per line
    #[arg(short, long, global = true, default_value = DEFAULT_CORPUS_PATH)]
    corpus: PathBuf,

    /// File holding the cached first guess
    #[arg(long, global = true, default_value = DEFAULT_CACHE_PATH)]
    cache: PathBuf,

    /// Neither read nor write the first-guess cache
    #[arg(long, global = true)]
    no_cache: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: enter C/P/N feedback after each guess (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts after each guess
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many guesses
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },

    /// Show how a guess would split the corpus
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Solve a random sample of corpus words and report statistics
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(short, long)]
        seed: Option<u64>,

        /// Count a word as failed after this many guesses
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },

    /// Build the corpus file from an n-gram frequency CSV and an allowed-guess list
    Prepare {
        /// Raw `word,count` frequency CSV
        #[arg(long)]
        ngrams: PathBuf,

        /// Allowed guesses, one per line
        #[arg(long)]
        allowed: PathBuf,

        /// Where to write the corpus (defaults to --corpus)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        command,
        corpus,
        cache,
        no_cache,
    } = cli;
    let load_solver = || -> Result<HeuristicSolver<CacheKind>> {
        let words = load_from_file(&corpus)?;
        Ok(HeuristicSolver::new(
            words,
            CacheKind::from_options(&cache, !no_cache),
        ))
    };

    // Default to Play mode if no command given
    match command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut solver = load_solver()?;
            run_simple(&mut solver, io::stdin().lock(), io::stdout().lock())?;
        }
        Commands::Solve {
            word,
            verbose,
            max_guesses,
        } => {
            let mut solver = load_solver()?;
            let mut config = SolveConfig::new(word);
            config.max_guesses = max_guesses;
            let result = solve_word(&config, &mut solver)?;
            print_solve_result(&result, verbose);
        }
        Commands::Analyze { word } => {
            let solver = load_solver()?;
            let result = analyze_word(&word, &solver)?;
            print_analysis_result(&result);
        }
        Commands::Benchmark {
            count,
            seed,
            max_guesses,
        } => {
            let mut solver = load_solver()?;
            let secrets = sample_secrets(solver.all_words().words(), count, seed);
            println!("Running benchmark on {} random words...", secrets.len());
            let result = run_benchmark(&mut solver, &secrets, max_guesses);
            print_benchmark_result(&result);
        }
        Commands::Prepare {
            ngrams,
            allowed,
            output,
        } => {
            let output = output.as_ref().unwrap_or(&corpus);
            let summary = prepare_corpus(&ngrams, &allowed, output)?;
            print_prepare_summary(&summary);
        }
    }

    Ok(())
}
