//! # chunkdeck
//!
//! Text chunking engine: split a document into ordered, optionally
//! overlapping fragments that remember where they came from.
//!
//! ## Chunking Strategies
//!
//! ### Fixed Size
//!
//! A window of N characters sliding forward by N minus the overlap.
//!
//! ```text
//! Document: "abcdefghij"
//! Size: 4, Overlap: 0
//!
//! Chunk 0: "abcd"  [0..4]
//! Chunk 1: "efgh"  [4..8]
//! Chunk 2: "ij"    [8..10]
//! ```
//!
//! **Weakness**: Ignores linguistic boundaries and splits mid-word.
//!
//! ### Sentence
//!
//! One fragment per sentence. A sentence ends at `.`, `!` or `?` followed by
//! whitespace or the end of the text. Terminators with no text before them,
//! or glued to the next word, do not end a sentence and are skipped.
//!
//! ### Paragraph
//!
//! One fragment per paragraph, paragraphs being separated by blank lines.
//!
//! ### Recursive
//!
//! Paragraphs first. A paragraph longer than the chunk size is broken into
//! sentences; nothing is ever split below the sentence level.
//!
//! ## Overlap
//!
//! Fixed-size chunking overlaps inside the window. The other three strategies
//! stitch the tail of each fragment onto the front of the next one, separated
//! by a space. A stitched fragment's `start..end` no longer slices out its
//! `text` exactly; [`Fragment::overlap`] records how long the prefix is.
//!
//! ## Units
//!
//! Chunk sizes, overlaps and the sizes in [`ChunkingStats`] count characters
//! (`char`s). Fragment `start`/`end` are byte offsets into the source, so they
//! can slice it directly.
//!
//! ## Quick Start
//!
//! ```rust
//! use chunkdeck::{chunk_text, compute_stats, Strategy};
//!
//! let text = "Chunking splits documents. Overlap keeps context.\n\n\
//!             A second paragraph follows.";
//!
//! let fragments = chunk_text(text, Strategy::Sentence, 200, 10);
//! assert_eq!(fragments.len(), 3);
//!
//! let stats = compute_stats(&fragments, 10);
//! assert_eq!(stats.chunk_count, 3);
//! assert!(stats.min_size <= stats.avg_size && stats.avg_size <= stats.max_size);
//! ```
//!
//! ## Performance Considerations
//!
//! | Strategy | Time | Output |
//! |----------|------|--------|
//! | Fixed | O(n) | ~n / step fragments |
//! | Sentence | O(n) | one per sentence |
//! | Paragraph | O(n) | one per paragraph |
//! | Recursive | O(n) | paragraphs or sentences |
//!
//! Offsets come straight from the boundary scan, so no strategy searches the
//! text again to locate its fragments. Stitching copies at most `overlap`
//! extra characters per fragment.
//!
//! Nothing here allocates shared state, blocks or fails: every function is a
//! pure function of its arguments and is safe to call from any thread.

mod boundary;
mod config;
mod error;
mod fixed;
mod fragment;
mod overlap;
mod paragraph;
mod recursive;
mod sentence;
mod stats;
mod strategy;

pub use config::{defaults, ChunkingConfig};
pub use error::{Error, Result};
pub use fixed::{fixed_size, FixedChunker};
pub use fragment::Fragment;
pub use overlap::{stitch_overlap, OVERLAP_SEPARATOR};
pub use paragraph::{by_paragraph, ParagraphChunker};
pub use recursive::{recursive, RecursiveChunker};
pub use sentence::{by_sentence, SentenceChunker};
pub use stats::{compute_stats, ChunkingStats};
pub use strategy::{chunk_text, overlap_chars, Strategy};

/// A text chunking strategy.
///
/// All chunkers implement this trait, enabling polymorphic usage:
///
/// ```rust
/// use chunkdeck::{Chunker, FixedChunker, Fragment, SentenceChunker};
///
/// fn chunk_document(chunker: &dyn Chunker, text: &str) -> Vec<Fragment> {
///     chunker.chunk(text)
/// }
///
/// let fixed = FixedChunker::new(100, 20);
/// let sentence = SentenceChunker::new(5);
///
/// let text = "Hello world. This is a test.";
/// let fragments1 = chunk_document(&fixed, text);
/// let fragments2 = chunk_document(&sentence, text);
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into fragments.
    ///
    /// Empty input always yields an empty vector. Each [`Fragment`] carries
    /// its byte offsets in the original document.
    fn chunk(&self, text: &str) -> Vec<Fragment>;

    /// Estimate the number of fragments for a given text length.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        // Conservative default
        (text_len / 500).max(1)
    }
}
