//! Chunking configuration.
//!
//! The UI hands the engine three values: a strategy tag, a chunk
//! size and an overlap percentage. `ChunkingConfig` bundles them, fills in
//! defaults for anything missing when deserialized, and offers opt-in
//! validation for callers that do not trust their input.
//!
//! ```rust
//! use chunkdeck::{ChunkingConfig, Strategy};
//!
//! let config: ChunkingConfig =
//!     serde_json::from_str(r#"{ "strategy": "recursive", "chunkSize": 300 }"#).unwrap();
//!
//! assert_eq!(config.strategy, Strategy::Recursive);
//! assert_eq!(config.chunk_size, 300);
//! assert_eq!(config.overlap_percent, 10); // default
//! assert_eq!(config.overlap_chars(), 30);
//! ```

use serde::{Deserialize, Serialize};

use crate::{chunk_text, overlap_chars, Error, Fragment, Result, Strategy};

/// Default configuration constants
pub mod defaults {
    /// Default chunk size in characters.
    pub const CHUNK_SIZE: usize = 500;

    /// Default overlap, as a percentage of the chunk size.
    pub const OVERLAP_PERCENT: u32 = 10;
}

fn default_chunk_size() -> usize {
    defaults::CHUNK_SIZE
}

fn default_overlap_percent() -> u32 {
    defaults::OVERLAP_PERCENT
}

/// Strategy plus sizing for one chunking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkingConfig {
    /// Segmentation algorithm.
    #[serde(default)]
    pub strategy: Strategy,
    /// Target chunk size in characters.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Overlap as a percentage of `chunk_size`.
    #[serde(default = "default_overlap_percent")]
    pub overlap_percent: u32,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            chunk_size: default_chunk_size(),
            overlap_percent: default_overlap_percent(),
        }
    }
}

impl ChunkingConfig {
    /// Create a configuration.
    #[must_use]
    pub const fn new(strategy: Strategy, chunk_size: usize, overlap_percent: u32) -> Self {
        Self {
            strategy,
            chunk_size,
            overlap_percent,
        }
    }

    /// Set the strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the chunk size in characters.
    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the overlap percentage.
    #[must_use]
    pub const fn with_overlap_percent(mut self, overlap_percent: u32) -> Self {
        self.overlap_percent = overlap_percent;
        self
    }

    /// Overlap in characters, rounded half up.
    #[must_use]
    pub fn overlap_chars(&self) -> usize {
        overlap_chars(self.chunk_size, self.overlap_percent)
    }

    /// Check that the chunk size is positive and the overlap is a percentage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] for a zero chunk size and
    /// [`Error::OverlapPercentOutOfRange`] for an overlap above 100.
    pub fn validate(&self) -> Result<()> {
        let result = if self.chunk_size == 0 {
            Err(Error::InvalidChunkSize(self.chunk_size))
        } else if self.overlap_percent > 100 {
            Err(Error::OverlapPercentOutOfRange(self.overlap_percent))
        } else {
            Ok(())
        };

        if let Err(err) = &result {
            tracing::debug!(config = ?self, %err, "rejected chunking config");
        }
        result
    }

    /// Chunk `text` with this configuration.
    #[must_use]
    pub fn chunk(&self, text: &str) -> Vec<Fragment> {
        chunk_text(text, self.strategy, self.chunk_size, self.overlap_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChunkingConfig::default();
        assert_eq!(config.strategy, Strategy::Fixed);
        assert_eq!(config.chunk_size, 500);
        assert_eq!(config.overlap_percent, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ChunkingConfig::default()
            .with_strategy(Strategy::Sentence)
            .with_chunk_size(80)
            .with_overlap_percent(25);
        assert_eq!(config, ChunkingConfig::new(Strategy::Sentence, 80, 25));
        assert_eq!(config.overlap_chars(), 20);
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let config = ChunkingConfig::default().with_chunk_size(0);
        assert_eq!(config.validate(), Err(Error::InvalidChunkSize(0)));
    }

    #[test]
    fn test_overlap_percent_out_of_range() {
        let config = ChunkingConfig::default().with_overlap_percent(101);
        assert_eq!(config.validate(), Err(Error::OverlapPercentOutOfRange(101)));
        assert!(ChunkingConfig::default()
            .with_overlap_percent(100)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_invalid_config_still_chunks() {
        let config = ChunkingConfig::new(Strategy::Fixed, 0, 250);
        assert!(config.validate().is_err());
        assert!(!config.chunk("abc").is_empty());
    }

    #[test]
    fn test_chunk_uses_dispatcher() {
        let config = ChunkingConfig::new(Strategy::Paragraph, 100, 0);
        let fragments = config.chunk("A\n\nB");
        assert_eq!(fragments.len(), 2);
    }

    #[test]
    fn test_unknown_strategy_in_json_is_an_error() {
        let result: std::result::Result<ChunkingConfig, _> =
            serde_json::from_str(r#"{ "strategy": "semantic" }"#);
        assert!(result.is_err());
    }
}
