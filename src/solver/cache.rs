//! First-guess cache
//!
//! Scoring the opening guess compares every corpus word with every other one,
//! and the answer only depends on the corpus. It is worth remembering across runs.
//!
//! There is no invalidation: delete the cache file when the corpus changes.

use crate::error::SolverError;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Default location of the cache file
pub const DEFAULT_CACHE_PATH: &str = "first_guess_cache.txt";

/// Storage for the opening guess
pub trait FirstGuessCache {
    /// Read the cached guess, `Ok(None)` if nothing is stored
    ///
    /// # Errors
    /// Returns `SolverError::CacheIo` if the storage exists but cannot be read.
    fn try_read(&self) -> Result<Option<String>, SolverError>;

    /// Store the opening guess
    ///
    /// # Errors
    /// Returns `SolverError::CacheIo` if the storage cannot be written.
    fn write(&self, guess: &str) -> Result<(), SolverError>;
}

/// Cache kept in a plain text file holding a single word
#[derive(Debug, Clone)]
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: io::Error) -> SolverError {
        SolverError::CacheIo {
            path: self.path.clone(),
            source,
        }
    }
}

impl FirstGuessCache for FileCache {
    fn try_read(&self) -> Result<Option<String>, SolverError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let guess = content.trim();
                Ok((!guess.is_empty()).then(|| guess.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn write(&self, guess: &str) -> Result<(), SolverError> {
        fs::write(&self.path, guess).map_err(|e| self.io_error(e))
    }
}

/// Cache that stores nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl FirstGuessCache for NoCache {
    fn try_read(&self) -> Result<Option<String>, SolverError> {
        Ok(None)
    }

    fn write(&self, _guess: &str) -> Result<(), SolverError> {
        Ok(())
    }
}

/// Cache selected at runtime
///
/// Keeps static dispatch while letting the command line turn caching off.
#[derive(Debug, Clone)]
pub enum CacheKind {
    File(FileCache),
    Disabled(NoCache),
}

impl CacheKind {
    /// File cache at `path`, or no cache when `enabled` is false
    #[must_use]
    pub fn from_options(path: impl Into<PathBuf>, enabled: bool) -> Self {
        if enabled {
            Self::File(FileCache::new(path))
        } else {
            Self::Disabled(NoCache)
        }
    }
}

impl FirstGuessCache for CacheKind {
    fn try_read(&self) -> Result<Option<String>, SolverError> {
        match self {
            Self::File(c) => c.try_read(),
            Self::Disabled(c) => c.try_read(),
        }
    }

    fn write(&self, guess: &str) -> Result<(), SolverError> {
        match self {
            Self::File(c) => c.write(guess),
            Self::Disabled(c) => c.write(guess),
        }
    }
}
