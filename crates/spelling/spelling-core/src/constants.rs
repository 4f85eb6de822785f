/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the document collection holding spelling preferences.
pub const COLLECTION_NAME: &str = "spellingPreferences";

/// Serialized name of the learned-words field on a preferences document.
pub const LEARNED_WORDS_FIELD: &str = "learnedWords";

/// Serialized name of the key field on a preferences document.
pub const TOKEN_FIELD: &str = "token";
