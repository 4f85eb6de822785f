//! Test fixtures for learned-words persistence: JSON scenario loader and a
//! recording preference store.

mod recording_store;

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

pub use recording_store::{RecordingStore, StoreCall};

/// Root directory of the JSON fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// The canonical duplicate-collapsing scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct DedupScenario {
    pub token: String,
    pub word: String,
    pub stored_with_duplicates: Vec<String>,
    pub expected_after_dedup: Vec<String>,
}

/// A realistic word list, in learning order, with its distinct members.
#[derive(Debug, Clone, Deserialize)]
pub struct VocabularyScenario {
    pub token: String,
    pub words: Vec<String>,
    pub distinct: Vec<String>,
}

pub fn dedup_scenario() -> DedupScenario {
    load_fixture("learned_words.json")
}

pub fn vocabulary_scenario() -> VocabularyScenario {
    load_fixture("technical_vocabulary.json")
}
