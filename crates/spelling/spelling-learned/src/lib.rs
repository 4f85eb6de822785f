//! # spelling-learned
//!
//! The learned-words manager: the set of dictionary exceptions each user
//! token has taught the spell-checker, persisted through an injected
//! [`IPreferenceStore`](spelling_core::IPreferenceStore).

pub mod manager;

pub use manager::LearnedWordsManager;
