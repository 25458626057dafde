//! Vocabulary store and word-matching engine.
//!
//! Accepts words into a persistent, deduplicated vocabulary and answers
//! two nearest-match queries over it: closest by character-code value and
//! closest by lexical order. The vocabulary is gated by a prefix index
//! and mirrored in an append-only word log, so a restarted process sees
//! exactly the words it accepted before.

pub mod analyzer;
pub mod matcher;
pub mod store;
pub mod trie;
pub mod wordlog;

pub use analyzer::{analyze, Analysis, AnalyzeRequest, AnalyzeResponse};
pub use matcher::{find_closest_by_lexical, find_closest_by_value, word_value};
pub use store::VocabularyStore;
pub use trie::PrefixIndex;
pub use wordlog::{FileLog, LogError, MemoryLog, WordLog};
