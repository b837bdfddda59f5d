//! Pure chunk planning for the map phase
//!
//! Splits an ordered document list into contiguous chunks. The chunk size is
//! `max(1, total / chunk_count)`, so the number of chunks produced can exceed
//! `chunk_count` when the division leaves a remainder.

use crate::mapreduce::types::{Chunk, Document};
use std::ops::Range;

/// Pure: Compute the chunk size for `total` documents split `chunk_count` ways
///
/// A `chunk_count` of zero is treated as one.
pub fn chunk_size(total: usize, chunk_count: usize) -> usize {
    (total / chunk_count.max(1)).max(1)
}

/// Pure: Plan the document index ranges of each chunk
///
/// # Examples
///
/// ```
/// use wordreduce::mapreduce::pure::chunking::plan_chunk_ranges;
///
/// assert_eq!(plan_chunk_ranges(12, 4), vec![0..3, 3..6, 6..9, 9..12]);
/// assert_eq!(plan_chunk_ranges(5, 2), vec![0..2, 2..4, 4..5]);
/// assert!(plan_chunk_ranges(0, 4).is_empty());
/// ```
pub fn plan_chunk_ranges(total: usize, chunk_count: usize) -> Vec<Range<usize>> {
    let size = chunk_size(total, chunk_count);

    (0..total)
        .step_by(size)
        .map(|start| start..(start + size).min(total))
        .collect()
}

/// Pure: Split documents into ordered, non-overlapping chunks
pub fn split_documents(documents: &[Document], chunk_count: usize) -> Vec<Chunk> {
    plan_chunk_ranges(documents.len(), chunk_count)
        .into_iter()
        .enumerate()
        .map(|(index, range)| Chunk {
            index,
            documents: documents[range].to_vec(),
        })
        .collect()
}
