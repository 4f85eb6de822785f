pub mod learned_words;
pub mod store_ops;

pub use learned_words::LearnedWordsRecord;
pub use store_ops::{DeleteResult, TokenFilter, UpdateOptions, UpdateResult, WordListUpdate};
