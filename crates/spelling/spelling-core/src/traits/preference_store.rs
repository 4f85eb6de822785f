use std::sync::Arc;

use crate::errors::SpellingResult;
use crate::models::{
    DeleteResult, LearnedWordsRecord, TokenFilter, UpdateOptions, UpdateResult, WordListUpdate,
};

/// The `spellingPreferences` document collection.
///
/// Every method is a single request against the store. Implementations must
/// apply `update_one` atomically per document; callers add no locking.
pub trait IPreferenceStore: Send + Sync {
    /// Apply a set-add or set-remove to the matching document,
    /// creating it first when `options.upsert` is set and nothing matches.
    fn update_one(
        &self,
        filter: &TokenFilter,
        update: &WordListUpdate,
        options: UpdateOptions,
    ) -> SpellingResult<UpdateResult>;

    /// Fetch the matching document, `None` when absent.
    fn find_one(&self, filter: &TokenFilter) -> SpellingResult<Option<LearnedWordsRecord>>;

    /// Delete the matching document. Deleting nothing is not an error.
    fn delete_one(&self, filter: &TokenFilter) -> SpellingResult<DeleteResult>;
}

impl<S: IPreferenceStore + ?Sized> IPreferenceStore for Arc<S> {
    fn update_one(
        &self,
        filter: &TokenFilter,
        update: &WordListUpdate,
        options: UpdateOptions,
    ) -> SpellingResult<UpdateResult> {
        (**self).update_one(filter, update, options)
    }

    fn find_one(&self, filter: &TokenFilter) -> SpellingResult<Option<LearnedWordsRecord>> {
        (**self).find_one(filter)
    }

    fn delete_one(&self, filter: &TokenFilter) -> SpellingResult<DeleteResult> {
        (**self).delete_one(filter)
    }
}

impl<S: IPreferenceStore + ?Sized> IPreferenceStore for &S {
    fn update_one(
        &self,
        filter: &TokenFilter,
        update: &WordListUpdate,
        options: UpdateOptions,
    ) -> SpellingResult<UpdateResult> {
        (**self).update_one(filter, update, options)
    }

    fn find_one(&self, filter: &TokenFilter) -> SpellingResult<Option<LearnedWordsRecord>> {
        (**self).find_one(filter)
    }

    fn delete_one(&self, filter: &TokenFilter) -> SpellingResult<DeleteResult> {
        (**self).delete_one(filter)
    }
}
