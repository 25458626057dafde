use std::path::Path;
use std::sync::RwLock;

use tracing::{debug, info};

use crate::trie::PrefixIndex;
use crate::wordlog::{FileLog, LogError, WordLog};

/// Persistent, deduplicated vocabulary.
///
/// Owns the prefix index, the ordered word list, and the durable log as a
/// single aggregate behind one coarse lock: `add` is a critical section
/// over all three, readers see either the state before an `add` or after
/// it, never in between.
pub struct VocabularyStore {
    inner: RwLock<Inner>,
}

struct Inner {
    index: PrefixIndex,
    words: Vec<String>,
    log: Box<dyn WordLog>,
}

impl VocabularyStore {
    /// Open a store backed by a plain text file log at `path`.
    ///
    /// A missing file means an empty vocabulary; an unreadable or corrupt
    /// file is a construction error, since the true vocabulary cannot be
    /// recovered from it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LogError> {
        Self::from_log(Box::new(FileLog::new(path.as_ref())))
    }

    /// Build a store over any log implementation, replaying its records
    /// into the index and list in append order.
    pub fn from_log(mut log: Box<dyn WordLog>) -> Result<Self, LogError> {
        let records = log.read_all()?;
        let mut index = PrefixIndex::new();
        let mut words = Vec::with_capacity(records.len());
        for word in records {
            index.insert(&word);
            words.push(word);
        }
        info!(words = words.len(), "vocabulary loaded");
        Ok(Self {
            inner: RwLock::new(Inner { index, words, log }),
        })
    }

    /// Accept a word into the vocabulary.
    ///
    /// Returns `Ok(false)` without any mutation if the word is already
    /// known. For a new word the log append happens before the in-memory
    /// insertions, so a failed append leaves index, list, and log all
    /// untouched and surfaces the error to the caller.
    pub fn add(&self, word: &str) -> Result<bool, LogError> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        if inner.index.contains(word) {
            debug!(word, "rejected duplicate");
            return Ok(false);
        }
        inner.log.append(word)?;
        inner.index.insert(word);
        inner.words.push(word.to_owned());
        debug!(word, total = inner.words.len(), "accepted word");
        Ok(true)
    }

    /// The accepted words, in insertion order. Includes the word a just
    /// completed `add` accepted.
    pub fn snapshot(&self) -> Vec<String> {
        self.inner.read().expect("store lock poisoned").words.clone()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.inner
            .read()
            .expect("store lock poisoned")
            .index
            .contains(word)
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("store lock poisoned").words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::wordlog::MemoryLog;

    fn memory_store() -> VocabularyStore {
        VocabularyStore::from_log(Box::new(MemoryLog::new())).unwrap()
    }

    /// Log that accepts reads but fails every append.
    struct FailingLog;

    impl WordLog for FailingLog {
        fn read_all(&mut self) -> Result<Vec<String>, LogError> {
            Ok(Vec::new())
        }

        fn append(&mut self, _word: &str) -> Result<(), LogError> {
            Err(LogError::Io(std::io::Error::other("disk full")))
        }
    }

    #[test]
    fn test_add_accepts_new_word() {
        let store = memory_store();
        assert!(store.add("hello").unwrap());
        assert!(store.contains("hello"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let store = memory_store();
        assert!(store.add("hello").unwrap());
        assert!(!store.add("hello").unwrap());
        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot(), vec!["hello"]);
    }

    #[test]
    fn test_snapshot_preserves_insertion_order() {
        let store = memory_store();
        for word in ["cherry", "apple", "banana"] {
            store.add(word).unwrap();
        }
        assert_eq!(store.snapshot(), vec!["cherry", "apple", "banana"]);
    }

    #[test]
    fn test_empty_string_is_a_word() {
        let store = memory_store();
        assert!(store.add("").unwrap());
        assert!(!store.add("").unwrap());
        assert_eq!(store.snapshot(), vec![""]);
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = VocabularyStore::open(dir.path().join("absent.txt")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_restart_reproduces_accepted_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");

        let store = VocabularyStore::open(&path).unwrap();
        for word in ["gamma", "alpha", "beta", "alpha"] {
            store.add(word).unwrap();
        }
        let before = store.snapshot();
        drop(store);

        let reopened = VocabularyStore::open(&path).unwrap();
        assert_eq!(reopened.snapshot(), before);
        assert_eq!(reopened.snapshot(), vec!["gamma", "alpha", "beta"]);
        assert!(!reopened.add("alpha").unwrap());
    }

    #[test]
    fn test_log_matches_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");

        let store = VocabularyStore::open(&path).unwrap();
        for word in ["one", "two", "two", "three"] {
            store.add(word).unwrap();
        }

        let mut log = FileLog::new(&path);
        assert_eq!(log.read_all().unwrap(), store.snapshot());
    }

    #[test]
    fn test_corrupt_log_fails_construction() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, b"fine\n\xff\xfe").unwrap();

        assert!(matches!(
            VocabularyStore::open(&path),
            Err(LogError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_failed_append_leaves_store_unchanged() {
        let store = VocabularyStore::from_log(Box::new(FailingLog)).unwrap();
        assert!(store.add("word").is_err());
        assert!(!store.contains("word"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_add_race() {
        let store = Arc::new(memory_store());
        let threads: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.add("contested").unwrap())
            })
            .collect();

        let accepted = threads
            .into_iter()
            .map(|t| t.join().unwrap())
            .filter(|accepted| *accepted)
            .count();

        assert_eq!(accepted, 1);
        assert_eq!(store.snapshot(), vec!["contested"]);
    }

    #[test]
    fn test_concurrent_distinct_adds_all_land() {
        let store = Arc::new(memory_store());
        let threads: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.add(&format!("word{i}")).unwrap())
            })
            .collect();
        for t in threads {
            assert!(t.join().unwrap());
        }
        assert_eq!(store.len(), 8);
    }
}
