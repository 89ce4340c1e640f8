//! Summary statistics over a fragment sequence.

use serde::{Deserialize, Serialize};

use crate::Fragment;

/// Size summary of a chunking run.
///
/// Sizes are fragment text lengths in characters, stitched prefixes included.
/// `overlap_percent` is the requested setting, passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkingStats {
    /// Number of fragments.
    pub chunk_count: usize,
    /// Mean fragment length, rounded half up.
    pub avg_size: usize,
    /// Shortest fragment length.
    pub min_size: usize,
    /// Longest fragment length.
    pub max_size: usize,
    /// Overlap percentage the fragments were requested with.
    pub overlap_percent: u32,
}

/// Reduce `fragments` to a [`ChunkingStats`] snapshot.
///
/// ```rust
/// use chunkdeck::{compute_stats, fixed_size};
///
/// let stats = compute_stats(&fixed_size("abcdefghij", 4, 0), 0);
/// assert_eq!(stats.chunk_count, 3);
/// assert_eq!(stats.avg_size, 3); // 10 / 3 rounds to 3
/// assert_eq!((stats.min_size, stats.max_size), (2, 4));
/// ```
#[must_use]
pub fn compute_stats(fragments: &[Fragment], overlap_percent: u32) -> ChunkingStats {
    if fragments.is_empty() {
        return ChunkingStats {
            overlap_percent,
            ..ChunkingStats::default()
        };
    }

    let count = fragments.len();
    let sizes: Vec<usize> = fragments.iter().map(Fragment::char_len).collect();
    let total: usize = sizes.iter().sum();
    let min_size = sizes.iter().copied().min().unwrap_or(0);
    let max_size = sizes.iter().copied().max().unwrap_or(0);

    ChunkingStats {
        chunk_count: count,
        avg_size: (total + count / 2) / count,
        min_size,
        max_size,
        overlap_percent,
    }
}
