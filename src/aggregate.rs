//! Frequency aggregation over token streams
//!
//! Collapses a token sequence to one entry per distinct value, keeping the
//! order in which values first appear, and annotates each entry with its
//! occurrence count and its share of the whole sequence.

use std::collections::HashMap;

/// One distinct token with its statistics
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStat {
    /// Position of this value in the deduplicated sequence
    pub index: usize,
    pub value: String,
    /// Occurrences of `value` anywhere in the input
    pub count: usize,
    /// `count` divided by the length of the input, duplicates included
    pub frequency: f64,
}

/// Deduplicates `tokens` in first-occurrence order and computes counts
///
/// An empty input yields an empty output.
///
/// # Example
///
/// ```
/// use pagestat::aggregate;
///
/// let stats = aggregate(&["Cat", "and", "dog", "Cat", "runs"]);
/// assert_eq!(stats[0].value, "Cat");
/// assert_eq!(stats[0].count, 2);
/// assert!((stats[0].frequency - 0.4).abs() < 1e-12);
/// ```
pub fn aggregate<S: AsRef<str>>(tokens: &[S]) -> Vec<TokenStat> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for token in tokens {
        let token = token.as_ref();
        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    let total = tokens.len() as f64;

    order
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let count = counts[value];
            TokenStat {
                index,
                value: value.to_string(),
                count,
                frequency: count as f64 / total,
            }
        })
        .collect()
}
