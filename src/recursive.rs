//! Recursive paragraph-then-sentence splitting.
//!
//! Tries the coarsest boundary first and only descends when a piece is too
//! large.
//!
//! ## The Algorithm
//!
//! Given `max_size = 100`:
//!
//! ```text
//! 1. Split on blank lines (paragraphs)
//! 2. For each paragraph:
//!    - <= 100 characters: keep it whole
//!    - otherwise:    split it into sentences, one fragment per sentence
//! 3. Flatten, in document order
//! 4. Stitch overlap (optional)
//! ```
//!
//! There is no level below sentences. A single sentence longer than
//! `max_size` is emitted whole rather than being cut mid-sentence.
//!
//! ## Offsets
//!
//! Sentence spans are scanned inside each paragraph and shifted by the
//! paragraph's start, so every fragment keeps its exact source position even
//! when the same text appears more than once in the document.

use crate::boundary::{paragraph_spans, sentence_spans};
use crate::overlap::stitch_overlap;
use crate::{Chunker, Fragment};

/// Recursive paragraph/sentence splitter.
///
/// ## Example
///
/// ```rust
/// use chunkdeck::{Chunker, RecursiveChunker};
///
/// let chunker = RecursiveChunker::no_overlap(30);
/// let text = "Short intro.\n\nThis paragraph is longer. It gets split by sentence.";
/// let fragments = chunker.chunk(text);
///
/// let texts: Vec<_> = fragments.iter().map(|f| f.text.as_str()).collect();
/// assert_eq!(
///     texts,
///     ["Short intro.", "This paragraph is longer.", "It gets split by sentence."]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveChunker {
    max_size: usize,
    overlap: usize,
}

impl RecursiveChunker {
    /// Create a new recursive chunker.
    ///
    /// # Arguments
    ///
    /// * `max_size` - Largest paragraph, in characters, kept as a single fragment
    /// * `overlap` - Characters of context stitched from each fragment onto the next
    #[must_use]
    pub fn new(max_size: usize, overlap: usize) -> Self {
        Self { max_size, overlap }
    }

    /// Create a chunker with no overlap.
    #[must_use]
    pub fn no_overlap(max_size: usize) -> Self {
        Self::new(max_size, 0)
    }

    /// Byte spans of all fragment bodies, in document order.
    fn spans(&self, text: &str) -> Vec<std::ops::Range<usize>> {
        let mut spans = Vec::new();

        for paragraph in paragraph_spans(text) {
            if text[paragraph.clone()].chars().count() <= self.max_size {
                spans.push(paragraph);
                continue;
            }

            let offset = paragraph.start;
            spans.extend(
                sentence_spans(&text[paragraph])
                    .into_iter()
                    .map(|s| s.start + offset..s.end + offset),
            );
        }

        spans
    }
}

impl Chunker for RecursiveChunker {
    fn chunk(&self, text: &str) -> Vec<Fragment> {
        let fragments = Fragment::from_spans(text, self.spans(text));
        stitch_overlap(text, fragments, self.overlap)
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / self.max_size.max(1)).max(1)
    }
}

/// Split `text` into paragraphs, breaking paragraphs over `chunk_size`
/// characters into sentences, then stitch `overlap` characters of context.
#[must_use]
pub fn recursive(text: &str, chunk_size: usize, overlap: usize) -> Vec<Fragment> {
    RecursiveChunker::new(chunk_size, overlap).chunk(text)
}
