//! Error types for chunkdeck.
//!
//! Chunking itself never fails. These errors only come out of configuration
//! parsing and validation.

/// Errors that can occur while building a chunking configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// Overlap percentage outside `0..=100`.
    #[error("overlap percent {0} is out of range (must be 0..=100)")]
    OverlapPercentOutOfRange(u32),

    /// Strategy tag that names no known strategy.
    #[error("unknown chunking strategy: {0:?} (expected fixed, sentence, paragraph or recursive)")]
    UnknownStrategy(String),
}

/// Result type for chunkdeck operations.
pub type Result<T> = std::result::Result<T, Error>;
