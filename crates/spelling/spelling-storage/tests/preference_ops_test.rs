//! Integration test: document semantics of the spellingPreferences collection.

use spelling_core::models::*;
use spelling_core::traits::IPreferenceStore;
use spelling_storage::StorageEngine;

fn add(word: &str) -> WordListUpdate {
    WordListUpdate::AddToSet(word.to_string())
}

fn pull(word: &str) -> WordListUpdate {
    WordListUpdate::Pull(word.to_string())
}

#[test]
fn test_upsert_creates_missing_record() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let filter = TokenFilter::new("a6b3cd919ge");

    let result = engine
        .update_one(&filter, &add("instanton"), UpdateOptions::upsert())
        .unwrap();
    assert!(result.upserted);
    assert_eq!(result.matched_count, 0);

    let record = engine.find_one(&filter).unwrap().expect("record should exist");
    assert_eq!(record.token, "a6b3cd919ge");
    assert_eq!(record.learned_words, vec!["instanton"]);
}

#[test]
fn test_update_without_upsert_on_missing_record_is_noop() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let filter = TokenFilter::new("nobody");

    let result = engine
        .update_one(&filter, &pull("instanton"), UpdateOptions::default())
        .unwrap();
    assert_eq!(result, UpdateResult::default());
    assert!(engine.find_one(&filter).unwrap().is_none());

    let result = engine
        .update_one(&filter, &add("instanton"), UpdateOptions::default())
        .unwrap();
    assert_eq!(result.matched_count, 0);
    assert!(engine.find_one(&filter).unwrap().is_none());
}

#[test]
fn test_add_to_set_is_idempotent() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let filter = TokenFilter::new("t");

    engine
        .update_one(&filter, &add("word"), UpdateOptions::upsert())
        .unwrap();
    let second = engine
        .update_one(&filter, &add("word"), UpdateOptions::upsert())
        .unwrap();
    assert_eq!(second.matched_count, 1);
    assert_eq!(second.modified_count, 0);
    assert!(!second.upserted);

    let record = engine.find_one(&filter).unwrap().unwrap();
    assert_eq!(record.learned_words, vec!["word"]);
}

#[test]
fn test_add_preserves_insertion_order() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let filter = TokenFilter::new("t");
    for word in ["pears", "apples", "bananas"] {
        engine
            .update_one(&filter, &add(word), UpdateOptions::upsert())
            .unwrap();
    }
    let record = engine.find_one(&filter).unwrap().unwrap();
    assert_eq!(record.learned_words, vec!["pears", "apples", "bananas"]);
}

#[test]
fn test_pull_removes_word_and_seeded_duplicates() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let words: Vec<String> = ["apples", "bananas", "pears", "bananas"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    engine.replace_words("t", &words).unwrap();

    let result = engine
        .update_one(&TokenFilter::new("t"), &pull("bananas"), UpdateOptions::default())
        .unwrap();
    assert_eq!(result.modified_count, 1);

    let record = engine.find_one(&TokenFilter::new("t")).unwrap().unwrap();
    assert_eq!(record.learned_words, vec!["apples", "pears"]);
}

#[test]
fn test_find_one_returns_stored_duplicates_verbatim() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let words: Vec<String> = ["a", "b", "a"].iter().map(|s| s.to_string()).collect();
    engine.replace_words("t", &words).unwrap();

    let record = engine.find_one(&TokenFilter::new("t")).unwrap().unwrap();
    assert_eq!(record.learned_words, words);
}

#[test]
fn test_delete_one() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let filter = TokenFilter::new("t");
    engine
        .update_one(&filter, &add("word"), UpdateOptions::upsert())
        .unwrap();

    assert_eq!(engine.delete_one(&filter).unwrap().deleted_count, 1);
    assert!(engine.find_one(&filter).unwrap().is_none());
    assert_eq!(engine.delete_one(&filter).unwrap().deleted_count, 0);
}

#[test]
fn test_tokens_are_isolated() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .update_one(&TokenFilter::new("alice"), &add("foo"), UpdateOptions::upsert())
        .unwrap();
    engine
        .update_one(&TokenFilter::new("bob"), &add("bar"), UpdateOptions::upsert())
        .unwrap();
    engine.delete_one(&TokenFilter::new("alice")).unwrap();

    assert!(engine.find_one(&TokenFilter::new("alice")).unwrap().is_none());
    let bob = engine.find_one(&TokenFilter::new("bob")).unwrap().unwrap();
    assert_eq!(bob.learned_words, vec!["bar"]);
    assert_eq!(engine.count_records().unwrap(), 1);
}

#[test]
fn test_words_are_case_sensitive_and_unicode_safe() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let filter = TokenFilter::new("t");
    for word in ["Überall", "überall", "naïve", "\"quoted\""] {
        engine
            .update_one(&filter, &add(word), UpdateOptions::upsert())
            .unwrap();
    }
    let record = engine.find_one(&filter).unwrap().unwrap();
    assert_eq!(
        record.learned_words,
        vec!["Überall", "überall", "naïve", "\"quoted\""]
    );
}

#[test]
fn test_count_updated_before() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .update_one(&TokenFilter::new("t"), &add("w"), UpdateOptions::upsert())
        .unwrap();

    let past = chrono::Utc::now() - chrono::Duration::days(1);
    let future = chrono::Utc::now() + chrono::Duration::days(1);
    assert_eq!(engine.count_updated_before(past).unwrap(), 0);
    assert_eq!(engine.count_updated_before(future).unwrap(), 1);
}
