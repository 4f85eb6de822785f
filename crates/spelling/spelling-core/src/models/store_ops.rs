//! Call shapes exchanged with the document store: filter, update, options, results.

use serde::{Deserialize, Serialize};

/// Selects the single document whose `token` equals the given value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenFilter {
    pub token: String,
}

impl TokenFilter {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// A single-word mutation of the `learnedWords` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WordListUpdate {
    /// Append the word unless it is already present.
    AddToSet(String),
    /// Remove every occurrence of the word.
    Pull(String),
}

impl WordListUpdate {
    /// The word this update touches.
    pub fn word(&self) -> &str {
        match self {
            Self::AddToSet(word) | Self::Pull(word) => word,
        }
    }

    /// Apply the update to a stored word sequence in place.
    ///
    /// Returns `true` when the sequence changed. Duplicates already present
    /// in `words` are left alone by `AddToSet`.
    pub fn apply(&self, words: &mut Vec<String>) -> bool {
        match self {
            Self::AddToSet(word) => {
                if words.iter().any(|w| w == word) {
                    false
                } else {
                    words.push(word.clone());
                    true
                }
            }
            Self::Pull(word) => {
                let before = words.len();
                words.retain(|w| w != word);
                words.len() != before
            }
        }
    }
}

/// Options accompanying an update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOptions {
    /// Create the document when no document matches the filter.
    pub upsert: bool,
}

impl UpdateOptions {
    pub fn upsert() -> Self {
        Self { upsert: true }
    }
}

/// Outcome of an update as reported by the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResult {
    /// Number of documents matching the filter before the update (0 or 1).
    pub matched_count: u64,
    /// Number of documents whose word list actually changed.
    pub modified_count: u64,
    /// Whether a new document was created.
    pub upserted: bool,
}

/// Outcome of a delete as reported by the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub deleted_count: u64,
}
