//! Overlap stitching for boundary-based strategies.
//!
//! Fixed-size chunking encodes overlap in its sliding window. The sentence,
//! paragraph and recursive strategies instead produce disjoint fragments and
//! then copy the tail of each fragment onto the front of the next one:
//!
//! ```text
//! overlap = 4
//!
//! Raw:      ["Alpha one.", "Beta two.", "Gamma."]
//! Stitched: ["Alpha one.", "one. Beta two.", "two. Gamma."]
//!                           ^^^^^            ^^^^
//!                           tail of the previous *raw* fragment
//! ```
//!
//! The overlap counts characters. [`Fragment::overlap`] records the prefix
//! length in bytes, separator included, so the body can be sliced back out.
//!
//! Each output depends only on the current raw fragment and the one before
//! it. Stitched text never feeds into the next step.

use crate::Fragment;

/// Separator placed between the stitched prefix and the fragment body.
pub const OVERLAP_SEPARATOR: char = ' ';

/// Byte index where the last `n` characters of `s` begin (0 if `s` is shorter).
fn tail_start(s: &str, n: usize) -> usize {
    match n {
        0 => s.len(),
        _ => s.char_indices().rev().nth(n - 1).map_or(0, |(i, _)| i),
    }
}

/// Prepend up to `overlap` trailing characters of each fragment's predecessor.
///
/// `source` is the text the fragments were cut from. The first fragment is
/// returned unchanged. For every later fragment:
///
/// - the prefix is the last `overlap` characters of the previous raw text
///   (all of it when shorter)
/// - `start` moves back `overlap` characters from `previous.end` in `source`,
///   stopping at the start of the text
/// - `end` is kept
///
/// With `overlap == 0` or fewer than two fragments the input comes back as is.
#[must_use]
pub fn stitch_overlap(source: &str, fragments: Vec<Fragment>, overlap: usize) -> Vec<Fragment> {
    if overlap == 0 || fragments.len() < 2 {
        return fragments;
    }

    let mut stitched = Vec::with_capacity(fragments.len());
    stitched.push(fragments[0].clone());

    for pair in fragments.windows(2) {
        let (prev, current) = (&pair[0], &pair[1]);

        let prefix = &prev.text[tail_start(&prev.text, overlap)..];
        let start = source
            .get(..prev.end)
            .map_or(0, |head| tail_start(head, overlap));

        let mut text = String::with_capacity(prefix.len() + 1 + current.text.len());
        text.push_str(prefix);
        text.push(OVERLAP_SEPARATOR);
        text.push_str(&current.text);

        stitched.push(Fragment {
            text,
            start,
            end: current.end,
            overlap: prefix.len() + OVERLAP_SEPARATOR.len_utf8(),
        });
    }

    tracing::trace!(count = stitched.len(), overlap, "stitched fragment overlap");
    stitched
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "Alpha one. Beta two. Gamma.";

    fn raw() -> Vec<Fragment> {
        vec![
            Fragment::new("Alpha one.", 0, 10),
            Fragment::new("Beta two.", 11, 20),
            Fragment::new("Gamma.", 21, 27),
        ]
    }

    #[test]
    fn test_first_fragment_unchanged() {
        let stitched = stitch_overlap(SOURCE, raw(), 4);
        assert_eq!(stitched[0], raw()[0]);
    }

    #[test]
    fn test_prefix_from_raw_predecessor() {
        let stitched = stitch_overlap(SOURCE, raw(), 4);

        assert_eq!(stitched[1].text, "one. Beta two.");
        assert_eq!(stitched[1].start, 6);
        assert_eq!(stitched[1].end, 20);
        assert_eq!(stitched[1].overlap, 5);
        assert_eq!(stitched[1].core_text(), "Beta two.");

        // Uses "Beta two." not the stitched "one. Beta two."
        assert_eq!(stitched[2].text, "two. Gamma.");
        assert_eq!(stitched[2].start, 16);
    }

    #[test]
    fn test_overlap_longer_than_predecessor() {
        let fragments = vec![Fragment::new("Hi.", 0, 3), Fragment::new("There.", 4, 10)];
        let stitched = stitch_overlap("Hi. There.", fragments, 50);

        assert_eq!(stitched[1].text, "Hi. There.");
        assert_eq!(stitched[1].start, 0); // saturates
        assert_eq!(stitched[1].end, 10);
    }

    #[test]
    fn test_zero_overlap_is_identity() {
        assert_eq!(stitch_overlap(SOURCE, raw(), 0), raw());
    }

    #[test]
    fn test_single_fragment_is_identity() {
        let single = vec![Fragment::new("Only.", 0, 5)];
        assert_eq!(stitch_overlap("Only.", single.clone(), 3), single);
    }

    #[test]
    fn test_overlap_counts_characters() {
        let source = "ab日 c";
        let fragments = vec![Fragment::new("ab日", 0, 5), Fragment::new("c", 6, 7)];
        let stitched = stitch_overlap(source, fragments, 2);

        assert_eq!(stitched[1].text, "b日 c");
        assert_eq!(stitched[1].overlap, 5); // 'b' + '日' (3 bytes) + ' '
        assert_eq!(stitched[1].start, 1);
        assert_eq!(stitched[1].core_text(), "c");
    }

    #[test]
    fn test_tail_start() {
        assert_eq!(tail_start("héllo", 4), 1);
        assert_eq!(tail_start("héllo", 5), 0);
        assert_eq!(tail_start("héllo", 9), 0);
        assert_eq!(tail_start("héllo", 0), "héllo".len());
    }
}
