//! Core data types for the word-frequency MapReduce pipeline
//!
//! Chunks flow into the map phase, [`ChunkStatistics`] flow out of it, and a
//! single [`GlobalReport`] is produced by the reduce phase.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single input document
pub type Document = String;

/// Word → occurrence count, kept in first-occurrence order
pub type WordFrequency = IndexMap<String, usize>;

/// Number of entries kept in [`GlobalReport::word_distribution`] by default
pub const DEFAULT_TOP_N: usize = 10;

/// A contiguous run of documents assigned to one map task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Position of this chunk in the split
    pub index: usize,
    /// The documents, in their original order
    pub documents: Vec<Document>,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Result of the map phase for one chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkStatistics {
    /// Index of the chunk these statistics were computed from
    pub chunk_index: usize,
    /// Per-word counts within the chunk
    pub word_count: WordFrequency,
    /// Number of documents in the chunk
    pub doc_count: usize,
    /// Total characters across the chunk's documents
    pub total_chars: usize,
    /// Number of distinct words in the chunk
    pub unique_words: usize,
}

impl ChunkStatistics {
    /// Statistics for a chunk with no documents
    pub fn empty(chunk_index: usize) -> Self {
        Self {
            chunk_index,
            word_count: WordFrequency::new(),
            doc_count: 0,
            total_chars: 0,
            unique_words: 0,
        }
    }

    /// Sum of all word counts in the chunk
    pub fn total_words(&self) -> usize {
        self.word_count.values().sum()
    }
}

/// A word paired with its occurrence count
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Final result of the reduce phase
///
/// Equality includes the ranking order of `word_distribution`.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct GlobalReport {
    pub total_documents: usize,
    pub total_characters: usize,
    pub total_unique_words: usize,
    pub total_words: usize,
    /// Highest count; `("", 0)` when no words were seen
    pub most_common_word: WordCount,
    /// Lowest count; `("", 0)` when no words were seen
    pub least_common_word: WordCount,
    /// Top words by descending count
    pub word_distribution: IndexMap<String, usize>,
}

impl GlobalReport {
    /// Report for an input with no words at all
    pub fn empty() -> Self {
        Self {
            total_documents: 0,
            total_characters: 0,
            total_unique_words: 0,
            total_words: 0,
            most_common_word: WordCount::default(),
            least_common_word: WordCount::default(),
            word_distribution: IndexMap::new(),
        }
    }
}

impl PartialEq for GlobalReport {
    fn eq(&self, other: &Self) -> bool {
        self.total_documents == other.total_documents
            && self.total_characters == other.total_characters
            && self.total_unique_words == other.total_unique_words
            && self.total_words == other.total_words
            && self.most_common_word == other.most_common_word
            && self.least_common_word == other.least_common_word
            // IndexMap equality ignores order
            && self.word_distribution.iter().eq(other.word_distribution.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(distribution: &[(&str, usize)]) -> GlobalReport {
        GlobalReport {
            total_documents: 1,
            total_characters: 3,
            total_unique_words: 2,
            total_words: 2,
            most_common_word: WordCount::new("x", 1),
            least_common_word: WordCount::new("x", 1),
            word_distribution: distribution
                .iter()
                .map(|(w, c)| (w.to_string(), *c))
                .collect(),
        }
    }

    #[test]
    fn test_report_equality_respects_ranking_order() {
        let xy = report_with(&[("x", 1), ("y", 1)]);
        let yx = report_with(&[("y", 1), ("x", 1)]);

        assert_eq!(xy, report_with(&[("x", 1), ("y", 1)]));
        assert_ne!(xy, yx);
    }

    #[test]
    fn test_report_equality_checks_counts() {
        assert_ne!(
            report_with(&[("x", 1), ("y", 1)]),
            report_with(&[("x", 1), ("y", 2)])
        );
    }

    #[test]
    fn test_chunk_statistics_totals() {
        let mut stats = ChunkStatistics::empty(3);
        assert_eq!(stats.total_words(), 0);
        stats.word_count.insert("a".to_string(), 2);
        stats.word_count.insert("b".to_string(), 1);
        assert_eq!(stats.total_words(), 3);
        assert_eq!(stats.chunk_index, 3);
    }
}
