//! Strategy selection and dispatch.
//!
//! [`chunk_text`] is the single entry point the presentation layer calls: a
//! strategy, a chunk size and an overlap *percentage*. The percentage is
//! turned into characters once, relative to the chunk size, and handed to
//! whichever strategy was picked:
//!
//! ```text
//! chunk_size = 200, overlap_percent = 15  ->  overlap = 30 characters
//! chunk_size = 10,  overlap_percent = 25  ->  overlap = 3 characters (2.5 rounds up)
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    Chunker, Error, FixedChunker, Fragment, ParagraphChunker, RecursiveChunker, SentenceChunker,
};

/// A segmentation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Sliding character window; overlap is part of the window.
    #[default]
    Fixed,
    /// One fragment per sentence.
    Sentence,
    /// One fragment per blank-line separated paragraph.
    Paragraph,
    /// Paragraphs, with oversized paragraphs broken into sentences.
    Recursive,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 4] = [Self::Fixed, Self::Sentence, Self::Paragraph, Self::Recursive];

    /// The lowercase tag for this strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Sentence => "sentence",
            Self::Paragraph => "paragraph",
            Self::Recursive => "recursive",
        }
    }

    /// Parse a tag, falling back to [`Strategy::Fixed`] for anything unknown.
    ///
    /// Use [`str::parse`] instead when an unknown tag should be an error.
    ///
    /// ```rust
    /// use chunkdeck::Strategy;
    ///
    /// assert_eq!(Strategy::from_tag("paragraph"), Strategy::Paragraph);
    /// assert_eq!(Strategy::from_tag("semantic"), Strategy::Fixed);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_| {
            tracing::debug!(tag, "unknown strategy tag, falling back to fixed");
            Self::Fixed
        })
    }

    /// Build the configured chunker for this strategy.
    ///
    /// `chunk_size` only matters for [`Strategy::Fixed`] and
    /// [`Strategy::Recursive`].
    #[must_use]
    pub fn chunker(self, chunk_size: usize, overlap: usize) -> Box<dyn Chunker> {
        match self {
            Self::Fixed => Box::new(FixedChunker::new(chunk_size, overlap)),
            Self::Sentence => Box::new(SentenceChunker::new(overlap)),
            Self::Paragraph => Box::new(ParagraphChunker::new(overlap)),
            Self::Recursive => Box::new(RecursiveChunker::new(chunk_size, overlap)),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert an overlap percentage of `chunk_size` into characters, rounding half up.
///
/// ```rust
/// use chunkdeck::overlap_chars;
///
/// assert_eq!(overlap_chars(200, 15), 30);
/// assert_eq!(overlap_chars(10, 25), 3);
/// assert_eq!(overlap_chars(10, 24), 2);
/// ```
#[must_use]
pub fn overlap_chars(chunk_size: usize, overlap_percent: u32) -> usize {
    let scaled = chunk_size.saturating_mul(overlap_percent as usize);
    scaled.saturating_add(50) / 100
}

/// Chunk `text` with the given strategy.
///
/// The overlap is `overlap_percent` of `chunk_size`, converted with
/// [`overlap_chars`]. Inputs are not validated; see
/// [`ChunkingConfig::validate`](crate::ChunkingConfig::validate) for callers
/// that need it.
///
/// ```rust
/// use chunkdeck::{chunk_text, Strategy};
///
/// let fragments = chunk_text("abcdefghij", Strategy::Fixed, 4, 0);
/// assert_eq!(fragments.len(), 3);
/// assert!(chunk_text("", Strategy::Recursive, 100, 20).is_empty());
/// ```
#[must_use]
pub fn chunk_text(
    text: &str,
    strategy: Strategy,
    chunk_size: usize,
    overlap_percent: u32,
) -> Vec<Fragment> {
    let overlap = overlap_chars(chunk_size, overlap_percent);
    let fragments = strategy.chunker(chunk_size, overlap).chunk(text);

    tracing::debug!(
        %strategy,
        chunk_size,
        overlap_percent,
        overlap,
        text_len = text.len(),
        fragments = fragments.len(),
        "chunked text"
    );

    fragments
}
