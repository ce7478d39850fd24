use std::num::NonZeroUsize;
use std::thread;

use crate::utils::UtilsError;

/// Largest distance from the target an expression may have and still count
pub const DEFAULT_TOLERANCE: i64 = 10;
/// Expressions handed to a worker at a time
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Configuration for a search
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Maximum allowed `|target - value|` for a candidate.
    pub tolerance: i64,
    /// Number of expressions reduced together by one worker.
    pub chunk_size: usize,
    /// Number of worker threads, and so the number of chunks in flight.
    pub concurrency: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            chunk_size: DEFAULT_CHUNK_SIZE,
            concurrency: thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}

impl SolverConfig {
    pub fn with_tolerance(mut self, tolerance: i64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// # Errors
    ///
    /// Returns an error if the chunk size or the concurrency is zero.
    pub fn validate(&self) -> Result<(), UtilsError> {
        if self.chunk_size == 0 {
            return Err(UtilsError::InvalidChunkSize);
        }
        if self.concurrency == 0 {
            return Err(UtilsError::InvalidConcurrency);
        }
        Ok(())
    }
}
