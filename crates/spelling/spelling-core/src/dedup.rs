//! Order-preserving de-duplication of stored word lists.

use std::collections::HashSet;

/// Drop repeated words, keeping the first occurrence of each.
///
/// Runs in O(n): a `HashSet` answers membership, the input order is kept.
pub fn dedup_preserving_order<I>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for word in words {
        if seen.insert(word.clone()) {
            unique.push(word);
        }
    }
    unique
}
