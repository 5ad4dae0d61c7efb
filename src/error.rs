//! Error type shared by the solver library

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong inside the solver library
///
/// `CacheIo` is recoverable: the solver logs it and keeps going. The other
/// variants are reported to the caller, which decides whether to abort.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no candidate words remain; the feedback history is inconsistent")]
    ExhaustedCandidates,
    #[error("first-guess cache '{}' is not accessible", path.display())]
    CacheIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to load corpus '{}': {reason}", path.display())]
    CorpusLoad { path: PathBuf, reason: String },
}
