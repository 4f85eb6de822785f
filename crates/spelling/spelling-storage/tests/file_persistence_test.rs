//! File-backed persistence tests: restart survival, WAL mode, migrations,
//! read pool visibility.
//!
//! These tests use tempdir to create real file-backed databases and verify
//! data survives engine close + reopen cycles.

use spelling_core::config::StorageConfig;
use spelling_core::models::*;
use spelling_core::traits::IPreferenceStore;
use spelling_storage::migrations::LATEST_VERSION;
use spelling_storage::StorageEngine;

fn add(word: &str) -> WordListUpdate {
    WordListUpdate::AddToSet(word.to_string())
}

#[test]
fn words_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spelling.db");
    let filter = TokenFilter::new("a6b3cd919ge");

    {
        let engine = StorageEngine::open(&path).unwrap();
        engine
            .update_one(&filter, &add("instanton"), UpdateOptions::upsert())
            .unwrap();
        engine
            .update_one(&filter, &add("soliton"), UpdateOptions::upsert())
            .unwrap();
    }

    let engine = StorageEngine::open(&path).unwrap();
    let record = engine.find_one(&filter).unwrap().expect("record should survive");
    assert_eq!(record.learned_words, vec!["instanton", "soliton"]);
}

#[test]
fn deletion_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spelling.db");
    let filter = TokenFilter::new("t");

    {
        let engine = StorageEngine::open(&path).unwrap();
        engine
            .update_one(&filter, &add("word"), UpdateOptions::upsert())
            .unwrap();
        engine.delete_one(&filter).unwrap();
    }

    let engine = StorageEngine::open(&path).unwrap();
    assert!(engine.find_one(&filter).unwrap().is_none());
    assert_eq!(engine.count_records().unwrap(), 0);
}

#[test]
fn migrations_are_idempotent_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spelling.db");

    let first = StorageEngine::open(&path).unwrap();
    assert_eq!(first.schema_version().unwrap(), LATEST_VERSION);
    drop(first);

    let second = StorageEngine::open(&path).unwrap();
    assert_eq!(second.schema_version().unwrap(), LATEST_VERSION);
}

#[test]
fn file_backed_engine_uses_wal() {
    let dir = tempfile::tempdir().unwrap();
    let engine = StorageEngine::open(&dir.path().join("spelling.db")).unwrap();
    assert!(engine.verify_wal_mode().unwrap());
}

#[test]
fn wal_can_be_disabled_by_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        db_path: dir.path().join("spelling.db").to_string_lossy().into_owned(),
        wal_mode: false,
        ..StorageConfig::default()
    };
    let engine = StorageEngine::open_with_config(&config).unwrap();
    assert!(!engine.verify_wal_mode().unwrap());
}

#[test]
fn read_pool_sees_writes_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        db_path: dir.path().join("spelling.db").to_string_lossy().into_owned(),
        read_pool_size: 3,
        ..StorageConfig::default()
    };
    let engine = StorageEngine::open_with_config(&config).unwrap();
    assert_eq!(engine.pool().readers.as_ref().unwrap().size(), 3);

    let filter = TokenFilter::new("t");
    // More reads than readers, so every pooled connection is exercised.
    for i in 0..6 {
        let word = format!("word{i}");
        engine
            .update_one(&filter, &add(&word), UpdateOptions::upsert())
            .unwrap();
        let record = engine.find_one(&filter).unwrap().unwrap();
        assert_eq!(record.learned_words.last(), Some(&word));
    }
}

#[test]
fn memory_path_in_config_opens_in_memory() {
    let config = StorageConfig {
        db_path: ":memory:".to_string(),
        ..StorageConfig::default()
    };
    let engine = StorageEngine::open_with_config(&config).unwrap();
    assert!(engine.pool().db_path.is_none());
    assert!(engine.pool().readers.is_none());
}

#[test]
fn unopenable_path_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("spelling.db");
    let err = StorageEngine::open(&path).err().expect("open should fail");
    assert!(err.is_storage());
}
