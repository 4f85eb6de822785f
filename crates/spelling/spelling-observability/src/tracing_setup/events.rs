//! Structured log events for learned-words operations.
//!
//! Each function emits a `tracing` event with structured fields. Tokens are
//! session credentials: only debug-level events carry them.

/// Log that a word was added to a token's list.
pub fn word_learned(token: &str, word: &str, upserted: bool) {
    tracing::debug!(
        event = "word_learned",
        token = %token,
        word = %word,
        upserted = upserted,
        "word learned"
    );
}

/// Log that a word was removed from a token's list.
pub fn word_unlearned(token: &str, word: &str, removed: bool) {
    tracing::debug!(
        event = "word_unlearned",
        token = %token,
        word = %word,
        removed = removed,
        "word unlearned"
    );
}

/// Log that stored duplicates were dropped on read.
pub fn duplicates_collapsed(stored: usize, returned: usize) {
    tracing::info!(
        event = "duplicates_collapsed",
        stored = stored,
        returned = returned,
        "duplicate learned words collapsed on read"
    );
}

/// Log that a token's whole record was deleted.
pub fn learned_words_deleted(deleted: u64) {
    tracing::info!(
        event = "learned_words_deleted",
        deleted = deleted,
        "learned words deleted"
    );
}

/// Log a store failure forwarded to the caller.
pub fn storage_failed(operation: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(
        event = "storage_failed",
        operation = %operation,
        error = %error,
        "learned words store call failed"
    );
}
