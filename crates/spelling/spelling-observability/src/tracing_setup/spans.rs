//! Span definitions per learned-words operation.
//!
//! Each span carries the token it operates on via the `tracing` crate.

/// Create a learn-word span.
#[macro_export]
macro_rules! learn_word_span {
    ($token:expr) => {
        tracing::debug_span!("spelling.learn_word", token = %$token)
    };
}

/// Create an unlearn-word span.
#[macro_export]
macro_rules! unlearn_word_span {
    ($token:expr) => {
        tracing::debug_span!("spelling.unlearn_word", token = %$token)
    };
}

/// Create a get-learned-words span.
#[macro_export]
macro_rules! get_learned_words_span {
    ($token:expr) => {
        tracing::debug_span!("spelling.get_learned_words", token = %$token)
    };
}

/// Create a learned-words-size span.
#[macro_export]
macro_rules! get_learned_words_size_span {
    ($token:expr) => {
        tracing::debug_span!("spelling.get_learned_words_size", token = %$token)
    };
}

/// Create a delete-learned-words span.
#[macro_export]
macro_rules! delete_learned_words_span {
    ($token:expr) => {
        tracing::debug_span!("spelling.delete_learned_words", token = %$token)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const LEARN_WORD: &str = "spelling.learn_word";
    pub const UNLEARN_WORD: &str = "spelling.unlearn_word";
    pub const GET_LEARNED_WORDS: &str = "spelling.get_learned_words";
    pub const GET_LEARNED_WORDS_SIZE: &str = "spelling.get_learned_words_size";
    pub const DELETE_LEARNED_WORDS: &str = "spelling.delete_learned_words";
}
