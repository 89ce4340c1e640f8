//! Sentence-based chunking.
//!
//! One fragment per sentence, optionally stitched with the tail of the
//! previous sentence.
//!
//! ## Finding Sentences
//!
//! A sentence is some text, then a run of `.`, `!` or `?`, then whitespace or
//! the end of the text. Abbreviations therefore split:
//!
//! ```text
//! "Dr. Smith arrived. He sat."
//!     ^             ^        ^
//!     boundary      boundary boundary
//!
//! -> ["Dr.", "Smith arrived.", "He sat."]
//! ```
//!
//! Text after the last terminator is kept as a final sentence. Anything else
//! is skipped and appears in no fragment:
//!
//! - a terminator run with nothing before it (`"!!! Hello."` -> `["Hello."]`).
//!   Whitespace counts as text here, so in `"Hi.  ... there"` the second
//!   space opens a sentence and `"..."` is kept
//! - text whose terminators are glued to the next word: in `"Pi is 3.14. Done"`
//!   the `"Pi is 3."` is dropped, giving `["14.", "Done"]`
//!
//! When no sentence is found at all (`"?!"`, whitespace only) the whole trimmed
//! text comes back as a single fragment.

use crate::boundary::sentence_spans;
use crate::overlap::stitch_overlap;
use crate::{Chunker, Fragment};

/// Sentence-based chunker.
///
/// ## Example
///
/// ```rust
/// use chunkdeck::{Chunker, SentenceChunker};
///
/// let chunker = SentenceChunker::no_overlap();
/// let fragments = chunker.chunk("Hello world. This is a test.");
///
/// assert_eq!(fragments.len(), 2);
/// assert_eq!(fragments[0].text, "Hello world.");
/// assert_eq!(fragments[1].span(), 13..28);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SentenceChunker {
    overlap: usize,
}

impl SentenceChunker {
    /// Create a sentence chunker that stitches `overlap` characters of context
    /// from each sentence onto the next.
    #[must_use]
    pub fn new(overlap: usize) -> Self {
        Self { overlap }
    }

    /// Create a chunker with no overlap.
    #[must_use]
    pub fn no_overlap() -> Self {
        Self::new(0)
    }
}

impl Chunker for SentenceChunker {
    fn chunk(&self, text: &str) -> Vec<Fragment> {
        let fragments = Fragment::from_spans(text, sentence_spans(text));
        stitch_overlap(text, fragments, self.overlap)
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        // Rough estimate: ~100 chars per sentence
        (text_len / 100).max(1)
    }
}

/// Split `text` into sentences, stitching `overlap` characters of context.
///
/// `chunk_size` is accepted for signature parity with the other strategies
/// and ignored.
#[must_use]
pub fn by_sentence(text: &str, _chunk_size: usize, overlap: usize) -> Vec<Fragment> {
    SentenceChunker::new(overlap).chunk(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sentences() {
        let fragments = by_sentence("Hello world. This is a test.", 0, 0);

        assert_eq!(
            fragments,
            vec![
                Fragment::new("Hello world.", 0, 12),
                Fragment::new("This is a test.", 13, 28),
            ]
        );
    }

    #[test]
    fn test_mixed_terminators() {
        let fragments = SentenceChunker::no_overlap().chunk("Hello world. How are you? I am fine!");

        assert_eq!(fragments.len(), 3);
        assert!(fragments[1].text.starts_with("How"));
        assert!(fragments[2].text.ends_with("fine!"));
    }

    #[test]
    fn test_no_terminator_is_one_sentence() {
        let fragments = by_sentence("  just some words  ", 0, 0);
        assert_eq!(fragments, vec![Fragment::new("just some words", 2, 17)]);
    }

    #[test]
    fn test_with_overlap() {
        let fragments = by_sentence("Hello world. This is a test.", 0, 6);

        assert_eq!(fragments[0].text, "Hello world.");
        assert_eq!(fragments[1].text, "world. This is a test.");
        assert_eq!(fragments[1].start, 6);
        assert_eq!(fragments[1].end, 28);
    }

    #[test]
    fn test_chunk_size_is_ignored() {
        let text = "One. Two. Three.";
        assert_eq!(by_sentence(text, 1, 0), by_sentence(text, 1000, 0));
    }

    #[test]
    fn test_empty_text() {
        assert!(SentenceChunker::new(5).chunk("").is_empty());
    }

    #[test]
    fn test_skipped_text_is_not_in_any_fragment() {
        let fragments = by_sentence("Pi is 3.14. Done", 0, 0);
        assert_eq!(
            fragments,
            vec![Fragment::new("14.", 8, 11), Fragment::new("Done", 12, 16)]
        );

        let texts: Vec<_> = by_sentence("!!! Hello. ... there", 0, 0)
            .into_iter()
            .map(|f| f.text)
            .collect();
        assert_eq!(texts, ["Hello.", "there"]);
    }

    #[test]
    fn test_whitespace_before_terminators_opens_a_sentence() {
        let texts: Vec<_> = by_sentence("Hi.  ... there", 0, 0)
            .into_iter()
            .map(|f| f.text)
            .collect();
        assert_eq!(texts, ["Hi.", "...", "there"]);
    }

    #[test]
    fn test_only_terminators_falls_back_to_whole_text() {
        assert_eq!(by_sentence(" ?! ", 0, 0), vec![Fragment::new("?!", 1, 3)]);
    }

    #[test]
    fn test_overlap_counts_characters() {
        let text = "Ça va? Très bien.";
        let fragments = by_sentence(text, 0, 3);

        assert_eq!(fragments[1].text, "va? Très bien.");
        assert_eq!(fragments[1].start, 4); // "Ç" is two bytes
        assert_eq!(fragments[1].end, text.len());
        assert_eq!(fragments[1].core_text(), "Très bien.");
    }

    #[test]
    fn test_whitespace_only() {
        // Nothing to split: a single empty fragment at the trimmed position
        let fragments = SentenceChunker::no_overlap().chunk("   \n\t  ");
        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].is_empty());
    }
}
