//! In-memory `IPreferenceStore` that records every call it receives.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use spelling_core::errors::{SpellingResult, StorageError};
use spelling_core::models::{
    DeleteResult, LearnedWordsRecord, TokenFilter, UpdateOptions, UpdateResult, WordListUpdate,
};
use spelling_core::traits::IPreferenceStore;

/// One request as received by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    UpdateOne {
        filter: TokenFilter,
        update: WordListUpdate,
        options: UpdateOptions,
    },
    FindOne {
        filter: TokenFilter,
    },
    DeleteOne {
        filter: TokenFilter,
    },
}

/// Test double for the preferences collection.
///
/// Applies the same set semantics as the real store to an in-memory map,
/// records each call, and can be switched to fail every call.
#[derive(Debug, Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<StoreCall>>,
    documents: Mutex<HashMap<String, Vec<String>>>,
    failure: Mutex<Option<String>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw stored word list, duplicates included.
    pub fn with_record(self, token: &str, words: &[&str]) -> Self {
        lock(&self.documents).insert(
            token.to_string(),
            words.iter().map(|w| w.to_string()).collect(),
        );
        self
    }

    /// Make every subsequent call fail with a storage error.
    pub fn fail_with(&self, message: &str) {
        *lock(&self.failure) = Some(message.to_string());
    }

    /// Let calls succeed again.
    pub fn recover(&self) {
        *lock(&self.failure) = None;
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<StoreCall> {
        lock(&self.calls).clone()
    }

    pub fn last_call(&self) -> Option<StoreCall> {
        lock(&self.calls).last().cloned()
    }

    /// Raw stored words for a token, bypassing de-duplication.
    pub fn stored_words(&self, token: &str) -> Option<Vec<String>> {
        lock(&self.documents).get(token).cloned()
    }

    fn receive(&self, call: StoreCall) -> SpellingResult<()> {
        lock(&self.calls).push(call);
        match lock(&self.failure).as_ref() {
            Some(message) => Err(StorageError::Unavailable {
                message: message.clone(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

impl IPreferenceStore for RecordingStore {
    fn update_one(
        &self,
        filter: &TokenFilter,
        update: &WordListUpdate,
        options: UpdateOptions,
    ) -> SpellingResult<UpdateResult> {
        self.receive(StoreCall::UpdateOne {
            filter: filter.clone(),
            update: update.clone(),
            options,
        })?;

        let mut documents = lock(&self.documents);
        match documents.get_mut(&filter.token) {
            Some(words) => {
                let changed = update.apply(words);
                Ok(UpdateResult {
                    matched_count: 1,
                    modified_count: u64::from(changed),
                    upserted: false,
                })
            }
            None if options.upsert => {
                let mut words = Vec::new();
                update.apply(&mut words);
                documents.insert(filter.token.clone(), words);
                Ok(UpdateResult {
                    matched_count: 0,
                    modified_count: 0,
                    upserted: true,
                })
            }
            None => Ok(UpdateResult::default()),
        }
    }

    fn find_one(&self, filter: &TokenFilter) -> SpellingResult<Option<LearnedWordsRecord>> {
        self.receive(StoreCall::FindOne {
            filter: filter.clone(),
        })?;
        Ok(lock(&self.documents)
            .get(&filter.token)
            .map(|words| LearnedWordsRecord::new(filter.token.clone(), words.clone())))
    }

    fn delete_one(&self, filter: &TokenFilter) -> SpellingResult<DeleteResult> {
        self.receive(StoreCall::DeleteOne {
            filter: filter.clone(),
        })?;
        let removed = lock(&self.documents).remove(&filter.token).is_some();
        Ok(DeleteResult {
            deleted_count: u64::from(removed),
        })
    }
}
