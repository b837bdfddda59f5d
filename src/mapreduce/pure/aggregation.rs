//! Pure functions for reducing chunk statistics into a global report
//!
//! Chunk statistics form a semigroup: `combine` adds document and character
//! totals and unions the word maps with addition. Before folding, statistics
//! are ordered by chunk index so the merged word order always matches the
//! order in which words first occur in the input, whatever order the map
//! tasks finished in. Frequency ties are broken by that order.

use crate::mapreduce::types::{
    ChunkStatistics, GlobalReport, WordCount, WordFrequency, DEFAULT_TOP_N,
};
use indexmap::IndexMap;
use stillwater::Semigroup;

impl Semigroup for ChunkStatistics {
    fn combine(self, other: Self) -> Self {
        let mut word_count = self.word_count;
        for (word, count) in other.word_count {
            *word_count.entry(word).or_insert(0) += count;
        }

        ChunkStatistics {
            chunk_index: self.chunk_index.min(other.chunk_index),
            unique_words: word_count.len(),
            word_count,
            doc_count: self.doc_count + other.doc_count,
            total_chars: self.total_chars + other.total_chars,
        }
    }
}

/// Merge all chunk statistics into one, ordered by chunk index
///
/// Returns `None` when `results` is empty. Statistics sharing a chunk index
/// keep their relative input order.
pub fn merge_statistics(mut results: Vec<ChunkStatistics>) -> Option<ChunkStatistics> {
    results.sort_by_key(|stats| stats.chunk_index);
    results.into_iter().reduce(Semigroup::combine)
}

/// Reduce chunk statistics into a report keeping the default top 10 words
pub fn aggregate_results(results: Vec<ChunkStatistics>) -> GlobalReport {
    aggregate_results_with_top_n(results, DEFAULT_TOP_N)
}

/// Reduce chunk statistics into a report keeping the top `top_n` words
///
/// # Examples
///
/// ```
/// use wordreduce::mapreduce::pure::aggregation::aggregate_results;
/// use wordreduce::mapreduce::pure::mapping::map_chunks;
/// use wordreduce::mapreduce::pure::chunking::split_documents;
///
/// let docs = vec!["the cat sat".to_string(), "the dog ran".to_string()];
/// let report = aggregate_results(map_chunks(&split_documents(&docs, 2)));
///
/// assert_eq!(report.total_words, 6);
/// assert_eq!(report.total_unique_words, 5);
/// assert_eq!(report.most_common_word.word, "the");
/// assert_eq!(report.most_common_word.count, 2);
/// ```
pub fn aggregate_results_with_top_n(results: Vec<ChunkStatistics>, top_n: usize) -> GlobalReport {
    let Some(merged) = merge_statistics(results) else {
        return GlobalReport::empty();
    };

    GlobalReport {
        total_documents: merged.doc_count,
        total_characters: merged.total_chars,
        total_unique_words: merged.word_count.len(),
        total_words: merged.total_words(),
        most_common_word: most_common(&merged.word_count),
        least_common_word: least_common(&merged.word_count),
        word_distribution: top_words(&merged.word_count, top_n),
    }
}

/// Highest-count word; the earliest word wins a tie
pub fn most_common(words: &WordFrequency) -> WordCount {
    let mut best: Option<(&String, usize)> = None;
    for (word, &count) in words {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((word, count));
        }
    }
    best.map(|(word, count)| WordCount::new(word.clone(), count))
        .unwrap_or_default()
}

/// Lowest-count word; the earliest word wins a tie
pub fn least_common(words: &WordFrequency) -> WordCount {
    let mut best: Option<(&String, usize)> = None;
    for (word, &count) in words {
        if best.map_or(true, |(_, low)| count < low) {
            best = Some((word, count));
        }
    }
    best.map(|(word, count)| WordCount::new(word.clone(), count))
        .unwrap_or_default()
}

/// The `n` highest-count words in descending order, ties in word order
pub fn top_words(words: &WordFrequency, n: usize) -> IndexMap<String, usize> {
    let mut ranked: Vec<(&String, &usize)> = words.iter().collect();
    // stable sort keeps first-occurrence order among equal counts
    ranked.sort_by(|a, b| b.1.cmp(a.1));
    ranked
        .into_iter()
        .take(n)
        .map(|(word, &count)| (word.clone(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(index: usize, words: &[(&str, usize)], docs: usize, chars: usize) -> ChunkStatistics {
        let word_count: WordFrequency = words.iter().map(|(w, c)| (w.to_string(), *c)).collect();
        ChunkStatistics {
            chunk_index: index,
            unique_words: word_count.len(),
            word_count,
            doc_count: docs,
            total_chars: chars,
        }
    }

    #[test]
    fn test_combine_adds_counts() {
        let a = stats(0, &[("x", 2), ("y", 1)], 1, 10);
        let b = stats(1, &[("y", 3), ("z", 1)], 2, 5);

        let merged = a.combine(b);
        assert_eq!(merged.doc_count, 3);
        assert_eq!(merged.total_chars, 15);
        assert_eq!(merged.word_count["y"], 4);
        assert_eq!(merged.unique_words, 3);
        assert_eq!(merged.chunk_index, 0);
    }

    #[test]
    fn test_combine_is_associative() {
        let a = stats(0, &[("x", 1)], 1, 1);
        let b = stats(1, &[("y", 2), ("x", 1)], 1, 2);
        let c = stats(2, &[("z", 3), ("y", 1)], 1, 3);

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }

    #[test]
    fn test_aggregate_simple_scenario() {
        let results = vec![
            stats(0, &[("the", 1), ("cat", 1), ("sat", 1)], 1, 11),
            stats(1, &[("the", 1), ("dog", 1), ("ran", 1)], 1, 11),
        ];

        let report = aggregate_results(results);
        assert_eq!(report.total_documents, 2);
        assert_eq!(report.total_characters, 22);
        assert_eq!(report.total_words, 6);
        assert_eq!(report.total_unique_words, 5);
        assert_eq!(report.most_common_word, WordCount::new("the", 2));
        assert_eq!(report.least_common_word, WordCount::new("cat", 1));
    }

    #[test]
    fn test_aggregate_order_independent() {
        let results = vec![
            stats(0, &[("alpha", 1)], 1, 5),
            stats(1, &[("beta", 1)], 1, 4),
            stats(2, &[("gamma", 1), ("alpha", 1)], 1, 11),
        ];
        let mut reversed = results.clone();
        reversed.reverse();

        let forward = aggregate_results(results);
        let backward = aggregate_results(reversed);
        assert_eq!(forward, backward);
        assert_eq!(forward.least_common_word.word, "beta");
    }

    #[test]
    fn test_ties_break_by_first_appearance() {
        let results = vec![
            stats(1, &[("late", 2)], 1, 4),
            stats(0, &[("early", 2), ("rare", 1)], 1, 10),
        ];

        let report = aggregate_results(results);
        assert_eq!(report.most_common_word.word, "early");
        let order: Vec<&str> = report.word_distribution.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["early", "late", "rare"]);
    }

    #[test]
    fn test_empty_results_use_defaults() {
        let report = aggregate_results(vec![]);
        assert_eq!(report, GlobalReport::empty());
        assert_eq!(report.most_common_word, WordCount::new("", 0));
        assert_eq!(report.least_common_word, WordCount::new("", 0));
        assert!(report.word_distribution.is_empty());
    }

    #[test]
    fn test_chunks_without_words_keep_totals() {
        let report = aggregate_results(vec![stats(0, &[], 2, 6)]);
        assert_eq!(report.total_documents, 2);
        assert_eq!(report.total_characters, 6);
        assert_eq!(report.most_common_word, WordCount::default());
        assert!(report.word_distribution.is_empty());
    }

    #[test]
    fn test_distribution_truncates_to_top_n() {
        let words: Vec<(String, usize)> = (0..15).map(|i| (format!("w{}", i), 15 - i)).collect();
        let refs: Vec<(&str, usize)> = words.iter().map(|(w, c)| (w.as_str(), *c)).collect();

        let report = aggregate_results(vec![stats(0, &refs, 1, 1)]);
        assert_eq!(report.word_distribution.len(), 10);
        assert_eq!(report.word_distribution.get_index(0), Some((&"w0".to_string(), &15)));
        assert_eq!(report.word_distribution.get_index(9), Some((&"w9".to_string(), &6)));

        let report = aggregate_results_with_top_n(vec![stats(0, &refs, 1, 1)], 3);
        assert_eq!(report.word_distribution.len(), 3);
    }
}
