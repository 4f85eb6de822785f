//! LearnedWordsManager: add, remove, list and delete the learned words of a token.
//!
//! Stateless facade: every operation is exactly one call on the injected
//! store, and all state lives in the store.

use std::sync::Arc;

use spelling_core::config::ObservabilityConfig;
use spelling_core::dedup::dedup_preserving_order;
use spelling_core::errors::{SpellingError, SpellingResult};
use spelling_core::models::{TokenFilter, UpdateOptions, WordListUpdate};
use spelling_core::traits::IPreferenceStore;
use spelling_observability::tracing_setup::events;
use spelling_observability::{
    delete_learned_words_span, get_learned_words_size_span, get_learned_words_span,
    learn_word_span, unlearn_word_span, OperationMetrics,
};

/// Prefix under which manager timings are reported.
pub const METRICS_PREFIX: &str = "store.LearnedWordsManager";

/// Per-token learned-words operations over an injected preference store.
pub struct LearnedWordsManager<S> {
    store: S,
    metrics: Option<Arc<OperationMetrics>>,
}

impl<S: IPreferenceStore> LearnedWordsManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            metrics: None,
        }
    }

    /// Build a manager, attaching fresh metrics when `config.metrics_enabled`.
    pub fn with_config(store: S, config: &ObservabilityConfig) -> Self {
        let manager = Self::new(store);
        if config.metrics_enabled {
            manager.with_metrics(Arc::new(OperationMetrics::with_prefix(METRICS_PREFIX)))
        } else {
            manager
        }
    }

    /// Record call counts and latencies of every operation into `metrics`.
    pub fn with_metrics(mut self, metrics: Arc<OperationMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn metrics(&self) -> Option<&Arc<OperationMetrics>> {
        self.metrics.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add `word` to the token's learned words, creating the record if needed.
    /// Adding a word that is already present changes nothing.
    pub fn learn_word(&self, token: &str, word: &str) -> SpellingResult<()> {
        let _span = learn_word_span!(token).entered();
        require_non_empty("token", token)?;
        require_non_empty("word", word)?;

        self.timed("learn_word", || {
            let result = self
                .store
                .update_one(
                    &TokenFilter::new(token),
                    &WordListUpdate::AddToSet(word.to_string()),
                    UpdateOptions::upsert(),
                )
                .inspect_err(|e| events::storage_failed("learn_word", e))?;
            events::word_learned(token, word, result.upserted);
            Ok(())
        })
    }

    /// Remove `word` from the token's learned words.
    /// A missing word or a missing record is not an error.
    pub fn unlearn_word(&self, token: &str, word: &str) -> SpellingResult<()> {
        let _span = unlearn_word_span!(token).entered();
        require_non_empty("token", token)?;
        require_non_empty("word", word)?;

        self.timed("unlearn_word", || {
            let result = self
                .store
                .update_one(
                    &TokenFilter::new(token),
                    &WordListUpdate::Pull(word.to_string()),
                    UpdateOptions::default(),
                )
                .inspect_err(|e| events::storage_failed("unlearn_word", e))?;
            events::word_unlearned(token, word, result.modified_count > 0);
            Ok(())
        })
    }

    /// The token's learned words without duplicates, first occurrence first.
    /// A token with no record yields an empty list.
    pub fn get_learned_words(&self, token: &str) -> SpellingResult<Vec<String>> {
        let _span = get_learned_words_span!(token).entered();
        require_non_empty("token", token)?;

        self.timed("get_learned_words", || self.fetch_words(token))
    }

    /// Total UTF-8 byte length of the token's learned words, 0 without a record.
    pub fn get_learned_words_size(&self, token: &str) -> SpellingResult<usize> {
        let _span = get_learned_words_size_span!(token).entered();
        require_non_empty("token", token)?;

        self.timed("get_learned_words_size", || {
            Ok(self.fetch_words(token)?.iter().map(String::len).sum())
        })
    }

    /// Delete the token's whole record. Deleting a missing record is not an error.
    pub fn delete_users_learned_words(&self, token: &str) -> SpellingResult<()> {
        let _span = delete_learned_words_span!(token).entered();
        require_non_empty("token", token)?;

        self.timed("delete_users_learned_words", || {
            let result = self
                .store
                .delete_one(&TokenFilter::new(token))
                .inspect_err(|e| events::storage_failed("delete_users_learned_words", e))?;
            events::learned_words_deleted(result.deleted_count);
            Ok(())
        })
    }

    fn fetch_words(&self, token: &str) -> SpellingResult<Vec<String>> {
        let record = self
            .store
            .find_one(&TokenFilter::new(token))
            .inspect_err(|e| events::storage_failed("get_learned_words", e))?;

        let Some(record) = record else {
            return Ok(Vec::new());
        };
        let stored = record.learned_words.len();
        let words = dedup_preserving_order(record.learned_words);
        if words.len() != stored {
            events::duplicates_collapsed(stored, words.len());
        }
        Ok(words)
    }

    fn timed<T>(
        &self,
        operation: &str,
        f: impl FnOnce() -> SpellingResult<T>,
    ) -> SpellingResult<T> {
        match &self.metrics {
            Some(metrics) => metrics.time(operation, f),
            None => f(),
        }
    }
}

fn require_non_empty(field: &str, value: &str) -> SpellingResult<()> {
    if value.is_empty() {
        return Err(SpellingError::invalid_input(field, "must not be empty"));
    }
    Ok(())
}
