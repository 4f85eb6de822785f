use serde::{Deserialize, Serialize};

/// One document in the `spellingPreferences` collection.
///
/// `learned_words` is kept in storage order and may hold duplicates;
/// readers de-duplicate it before handing it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnedWordsRecord {
    /// Opaque user/session token. Primary key of the collection.
    pub token: String,
    /// Dictionary exceptions taught by this user. Case-sensitive.
    #[serde(default)]
    pub learned_words: Vec<String>,
}

impl LearnedWordsRecord {
    /// A record with no learned words yet, as created by an upsert.
    pub fn empty(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            learned_words: Vec::new(),
        }
    }

    pub fn new(token: impl Into<String>, learned_words: Vec<String>) -> Self {
        Self {
            token: token.into(),
            learned_words,
        }
    }
}
