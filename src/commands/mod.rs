//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod prepare;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_secrets};
pub use prepare::{PrepareSummary, prepare_corpus};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_word};
