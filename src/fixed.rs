//! Fixed-size chunking with overlap.
//!
//! The simplest chunking strategy: a window of N characters that slides
//! forward by `N - M` characters, so adjacent windows share M characters.
//!
//! Sizes count `char`s; `start`/`end` are still byte offsets, so a window
//! over multi-byte text is wider in bytes than `size`:
//!
//! ```text
//! size = 3:  "日本語日本語"  ->  "日本語" [0..9], "日本語" [9..18]
//! ```
//!
//! ## How It Works
//!
//! ```text
//! size = 10, overlap = 3
//!
//! Document: "abcdefghijklmnopqrstuvwxyz"
//!
//! Chunk 0: "abcdefghij"   [0..10]
//! Chunk 1: "hijklmnopq"   [7..17]   <- starts at 10 - 3 = 7
//! Chunk 2: "opqrstuvwx"   [14..24]  <- starts at 17 - 3 = 14
//! Chunk 3: "vwxyz"        [21..26]  <- final chunk may be shorter
//! ```
//!
//! The scan stops as soon as a window reaches the end of the text.
//!
//! ## Degenerate Parameters
//!
//! Nothing here is validated. The step is clamped to at least one character, so
//! `overlap >= size` still terminates, just with many heavily overlapping
//! windows. A zero size is clamped to one.
//!
//! Overlap lives in the window itself, so fixed-size fragments are never
//! stitched and `text == source[start..end]` always holds.

use crate::{Chunker, Fragment};

/// Fixed-size chunker with configurable overlap.
///
/// ## Example
///
/// ```rust
/// use chunkdeck::{Chunker, FixedChunker};
///
/// let chunker = FixedChunker::new(4, 0);
/// let fragments = chunker.chunk("abcdefghij");
///
/// let texts: Vec<_> = fragments.iter().map(|f| f.text.as_str()).collect();
/// assert_eq!(texts, ["abcd", "efgh", "ij"]);
/// assert_eq!(fragments[2].span(), 8..10);
/// ```
#[derive(Debug, Clone)]
pub struct FixedChunker {
    size: usize,
    overlap: usize,
}

impl FixedChunker {
    /// Create a new fixed-size chunker.
    ///
    /// # Arguments
    ///
    /// * `size` - Window size in characters (zero is treated as one)
    /// * `overlap` - Characters shared by adjacent windows
    #[must_use]
    pub fn new(size: usize, overlap: usize) -> Self {
        Self {
            size: size.max(1),
            overlap,
        }
    }

    /// Create a chunker with no overlap.
    #[must_use]
    pub fn no_overlap(size: usize) -> Self {
        Self::new(size, 0)
    }

    /// The step size between window starts.
    #[must_use]
    fn step(&self) -> usize {
        self.size.saturating_sub(self.overlap).max(1)
    }
}

impl Chunker for FixedChunker {
    fn chunk(&self, text: &str) -> Vec<Fragment> {
        if text.is_empty() {
            return vec![];
        }

        // Byte offset of every char start, plus the end of the text
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_count = bounds.len() - 1;

        let step = self.step();
        let mut fragments = Vec::with_capacity(self.estimate_chunks(char_count));
        let mut start: usize = 0;

        loop {
            let end = start.saturating_add(self.size).min(char_count);
            fragments.push(Fragment::from_span(text, bounds[start]..bounds[end]));

            if end >= char_count {
                break;
            }
            start += step;
        }

        fragments
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        // Exact for ASCII; an upper bound when `text_len` is in bytes
        if text_len == 0 {
            return 0;
        }
        text_len.div_ceil(self.step())
    }
}

/// Split `text` into windows of `chunk_size` characters sharing `overlap` characters.
///
/// Free-function form of [`FixedChunker`].
#[must_use]
pub fn fixed_size(text: &str, chunk_size: usize, overlap: usize) -> Vec<Fragment> {
    FixedChunker::new(chunk_size, overlap).chunk(text)
}
