use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("At least one source number is required")]
    EmptyNumbers,
    #[error("Source numbers must be positive integers: {0}")]
    NonPositiveNumber(i64),
    #[error("Chunk size must be at least 1")]
    InvalidChunkSize,
    #[error("Concurrency must be at least 1")]
    InvalidConcurrency,
}
