//! Word tokenization
//!
//! A word is a maximal run of word characters (`\w`: alphanumerics and
//! underscore) after lower-casing the text.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w+\b").expect("word pattern is a valid regex"));

/// Pure: Split text into lower-cased words, in order of appearance
///
/// # Examples
///
/// ```
/// use wordreduce::mapreduce::pure::tokenize::tokenize;
///
/// assert_eq!(tokenize("The cat, the HAT."), vec!["the", "cat", "the", "hat"]);
/// assert!(tokenize("--- !!").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Pure: Number of characters in a document
///
/// Counts Unicode scalar values, not bytes.
pub fn char_length(text: &str) -> usize {
    text.chars().count()
}
