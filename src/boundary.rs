//! Boundary scanners: sentence and paragraph split points.
//!
//! Both scanners walk the text once and report the byte span of every
//! trimmed, non-empty piece in source order. The split characters are all
//! ASCII, and ASCII bytes never occur inside a multi-byte UTF-8 sequence, so
//! every reported span lies on char boundaries.
//!
//! ## Sentences
//!
//! A sentence is a run of non-terminator characters, then one or more of
//! `.`, `!`, `?`, then whitespace or the end of the text. A final run with no
//! terminator at all is a sentence too. Anything that does not fit that
//! shape is skipped:
//!
//! ```text
//! "!!! Pi is 3.14. Really?! yes"
//!  ^^^       ^^
//!  |         "Pi is 3." is followed by '1': not a sentence, skipped
//!  nothing before the terminators: skipped
//!
//! -> ["14.", "Really?!", "yes"]
//! ```
//!
//! The whitespace after the terminators belongs to the sentence it ends, so
//! a terminator run standing alone between spaces (`"Hi. ... there"`) has
//! nothing before it and is skipped.
//!
//! ## Paragraphs
//!
//! Two or more consecutive `\n` separate paragraphs. A single newline is
//! part of the paragraph.

use std::ops::Range;

fn is_terminator(b: u8) -> bool {
    matches!(b, b'.' | b'!' | b'?')
}

/// Byte spans of the trimmed sentences in `text`.
pub(crate) fn sentence_spans(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut start = 0;

    while start < bytes.len() {
        let mut body_end = start;
        while body_end < bytes.len() && !is_terminator(bytes[body_end]) {
            body_end += 1;
        }

        if body_end == bytes.len() {
            // Trailing run without a terminator
            if let Some(span) = trimmed(text, start..body_end) {
                spans.push(span);
            }
            break;
        }

        let mut run_end = body_end;
        while run_end < bytes.len() && is_terminator(bytes[run_end]) {
            run_end += 1;
        }

        let has_body = body_end > start;
        match text[run_end..].chars().next() {
            None if has_body => {
                if let Some(span) = trimmed(text, start..run_end) {
                    spans.push(span);
                }
                start = run_end;
            }
            Some(c) if has_body && c.is_whitespace() => {
                if let Some(span) = trimmed(text, start..run_end) {
                    spans.push(span);
                }
                start = run_end + c.len_utf8();
            }
            // No body, or terminators glued to the next word: not a sentence
            _ => start = run_end,
        }
    }

    spans
}

/// Byte spans of the trimmed paragraphs in `text`.
pub(crate) fn paragraph_spans(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\n' {
            i += 1;
            continue;
        }

        let mut run_end = i;
        while run_end < bytes.len() && bytes[run_end] == b'\n' {
            run_end += 1;
        }

        if run_end - i >= 2 {
            if let Some(span) = trimmed(text, start..i) {
                spans.push(span);
            }
            start = run_end;
        }
        i = run_end;
    }

    if let Some(span) = trimmed(text, start..bytes.len()) {
        spans.push(span);
    }

    spans
}

/// Narrow `span` to exclude surrounding whitespace. `None` if nothing is left.
fn trimmed(text: &str, span: Range<usize>) -> Option<Range<usize>> {
    let piece = &text[span.clone()];
    let leading = piece.len() - piece.trim_start().len();
    let trailing = piece.len() - piece.trim_end().len();
    let start = span.start + leading;
    let end = span.end - trailing;
    (start < end).then_some(start..end)
}

/// The span of `text` with surrounding whitespace removed.
///
/// For whitespace-only input this is an empty span at the end of the text.
pub(crate) fn whole_trimmed(text: &str) -> Range<usize> {
    let leading = text.len() - text.trim_start().len();
    let end = text.trim_end().len().max(leading);
    leading..end
}
