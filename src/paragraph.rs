//! Paragraph-based chunking.
//!
//! Paragraphs are separated by blank lines, i.e. two or more consecutive
//! newlines:
//!
//! ```text
//! "Intro line\nstill intro\n\nBody.\n\n\nOutro."
//!                         ^^^^     ^^^^^^
//!
//! -> ["Intro line\nstill intro", "Body.", "Outro."]
//! ```

use crate::boundary::paragraph_spans;
use crate::overlap::stitch_overlap;
use crate::{Chunker, Fragment};

/// Paragraph-based chunker.
///
/// ## Example
///
/// ```rust
/// use chunkdeck::{Chunker, ParagraphChunker};
///
/// let fragments = ParagraphChunker::no_overlap().chunk("A\n\nB\n\nC");
/// let texts: Vec<_> = fragments.iter().map(|f| f.text.as_str()).collect();
/// assert_eq!(texts, ["A", "B", "C"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParagraphChunker {
    overlap: usize,
}

impl ParagraphChunker {
    /// Create a paragraph chunker that stitches `overlap` characters of context
    /// from each paragraph onto the next.
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

impl Chunker for ParagraphChunker {
    fn chunk(&self, text: &str) -> Vec<Fragment> {
        let fragments = Fragment::from_spans(text, paragraph_spans(text));
        stitch_overlap(text, fragments, self.overlap)
    }
}

/// Split `text` into paragraphs, stitching `overlap` characters of context.
///
/// `chunk_size` is accepted for signature parity with the other strategies
/// and ignored.
#[must_use]
pub fn by_paragraph(text: &str, _chunk_size: usize, overlap: usize) -> Vec<Fragment> {
    ParagraphChunker::new(overlap).chunk(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_paragraphs() {
        let fragments = by_paragraph("A\n\nB\n\nC", 0, 0);

        assert_eq!(
            fragments,
            vec![
                Fragment::new("A", 0, 1),
                Fragment::new("B", 3, 4),
                Fragment::new("C", 6, 7),
            ]
        );
    }

    #[test]
    fn test_repeated_paragraphs_keep_true_offsets() {
        let text = "Same.\n\nSame.\n\nSame.";
        let fragments = by_paragraph(text, 0, 0);

        let starts: Vec<_> = fragments.iter().map(|f| f.start).collect();
        assert_eq!(starts, [0, 7, 14]);
        for fragment in &fragments {
            assert_eq!(&text[fragment.span()], fragment.text);
        }
    }

    #[test]
    fn test_single_paragraph() {
        let fragments = by_paragraph("\n  one block\nof text  \n", 0, 0);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].text, "one block\nof text");
    }

    #[test]
    fn test_with_overlap() {
        let fragments = by_paragraph("First para.\n\nSecond para.", 0, 5);

        assert_eq!(fragments[1].text, "para. Second para.");
        assert_eq!(fragments[1].start, 6);
        assert_eq!(fragments[1].end, 25);
        assert_eq!(fragments[1].core_text(), "Second para.");
    }

    #[test]
    fn test_overlap_counts_characters() {
        let text = "café au lait\n\nné";
        let fragments = by_paragraph(text, 0, 2);
        assert_eq!(fragments[1].text, "it né");
        assert_eq!(fragments[1].span(), 11..text.len());

        let text = "au lait café\n\nné";
        let fragments = by_paragraph(text, 0, 2);
        assert_eq!(fragments[1].text, "fé né");
        assert_eq!(fragments[1].span(), 10..text.len());
        assert_eq!(fragments[1].core_text(), "né");
    }

    #[test]
    fn test_empty_text() {
        assert!(ParagraphChunker::new(3).chunk("").is_empty());
    }
}
