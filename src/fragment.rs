//! The Fragment type: a chunk of text with position metadata.

use serde::{Deserialize, Serialize};

/// A chunk of text with its position in the original document.
///
/// ## Byte Offsets
///
/// `start` and `end` are byte offsets into the original text, not character
/// indices, so they slice the source directly. Sizes handed to the chunkers
/// (chunk size, overlap) count characters instead; see [`Fragment::char_len`].
///
/// ```rust
/// use chunkdeck::Fragment;
///
/// let text = "Hello, world!";
/// let fragment = Fragment::new("world", 7, 12);
///
/// assert_eq!(&text[fragment.span()], "world");
/// ```
///
/// ## Stitched Fragments
///
/// The sentence, paragraph and recursive strategies can prepend the tail of
/// the previous fragment plus a single space. After that, `text` is no longer
/// `source[start..end]`:
///
/// ```text
/// Raw:      "One two."          [0..8]
///           "Three four."       [9..20]
/// Stitched: "One two."          [0..8]
///           "o. Three four."    [6..20]   overlap = 3 ("o." + " ")
///            ^^^
///            stitched prefix
/// ```
///
/// Treat `start..end` as a context anchor once `overlap > 0`. The original
/// body is still available through [`Fragment::core_text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// The fragment text.
    pub text: String,
    /// Byte offset where this fragment starts in the original document.
    #[serde(rename = "startIndex")]
    pub start: usize,
    /// Byte offset where this fragment ends (exclusive) in the original document.
    #[serde(rename = "endIndex")]
    pub end: usize,
    /// Byte length of the stitched prefix at the front of `text`, separator
    /// included. Zero for raw fragments.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub overlap: usize,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl Fragment {
    /// Create a raw (unstitched) fragment.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            overlap: 0,
        }
    }

    /// Create a fragment by slicing `source` at a byte span.
    ///
    /// The span must lie on char boundaries.
    pub(crate) fn from_span(source: &str, span: std::ops::Range<usize>) -> Self {
        Self::new(&source[span.clone()], span.start, span.end)
    }

    /// Build raw fragments from scanned spans.
    ///
    /// When the scan found nothing in a non-empty text, the whole trimmed
    /// text becomes the single fragment.
    pub(crate) fn from_spans(source: &str, spans: Vec<std::ops::Range<usize>>) -> Vec<Self> {
        if source.is_empty() {
            return vec![];
        }
        if spans.is_empty() {
            return vec![Self::from_span(source, crate::boundary::whole_trimmed(source))];
        }
        spans
            .into_iter()
            .map(|span| Self::from_span(source, span))
            .collect()
    }

    /// The length of this fragment's text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// The length of this fragment's text in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether this fragment's text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The byte span of this fragment in the original document.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// The fragment text without any stitched prefix.
    #[must_use]
    pub fn core_text(&self) -> &str {
        // `overlap` is only ever set by the stitcher, at a char boundary.
        self.text.get(self.overlap..).unwrap_or(&self.text)
    }

    /// Whether this fragment carries a stitched prefix.
    #[must_use]
    pub fn is_stitched(&self) -> bool {
        self.overlap > 0
    }
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Fragment {{ span: {}..{}, len: {}, overlap: {} }}",
            self.start,
            self.end,
            self.len(),
            self.overlap
        )
    }
}
