//! Pure map-phase computation
//!
//! Each chunk is processed independently into its own [`ChunkStatistics`];
//! nothing here touches shared state, so chunks may be mapped in any order
//! and on any thread.

use super::tokenize::{char_length, tokenize};
use crate::mapreduce::types::{Chunk, ChunkStatistics, WordFrequency};

/// Pure: Compute word statistics for one chunk
///
/// # Examples
///
/// ```
/// use wordreduce::mapreduce::pure::mapping::process_chunk;
/// use wordreduce::mapreduce::types::Chunk;
///
/// let chunk = Chunk { index: 0, documents: vec!["a a b".to_string()] };
/// let stats = process_chunk(&chunk);
/// assert_eq!(stats.word_count["a"], 2);
/// assert_eq!(stats.total_chars, 5);
/// ```
pub fn process_chunk(chunk: &Chunk) -> ChunkStatistics {
    let mut word_count = WordFrequency::new();
    let mut total_chars = 0;

    for doc in &chunk.documents {
        for word in tokenize(doc) {
            *word_count.entry(word).or_insert(0) += 1;
        }
        total_chars += char_length(doc);
    }

    ChunkStatistics {
        chunk_index: chunk.index,
        unique_words: word_count.len(),
        word_count,
        doc_count: chunk.documents.len(),
        total_chars,
    }
}

/// Pure: Map every chunk sequentially
pub fn map_chunks(chunks: &[Chunk]) -> Vec<ChunkStatistics> {
    chunks.iter().map(process_chunk).collect()
}
