use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("word log I/O: {0}")]
    Io(#[from] io::Error),
    #[error("word log is not valid UTF-8 (first invalid byte at offset {offset})")]
    Corrupt { offset: usize },
}

/// Append-only record sink backing the vocabulary.
///
/// One word per record; words containing the line separator are out of
/// scope. The trait exists so the store's durable-write failure path can
/// be exercised with a faulty implementation in tests.
pub trait WordLog: Send + Sync {
    /// Every record appended so far, in append order.
    fn read_all(&mut self) -> Result<Vec<String>, LogError>;

    /// Durably append one record. Does not return before the record has
    /// been handed to the underlying medium and flushed.
    fn append(&mut self, word: &str) -> Result<(), LogError>;
}

/// Plain text file log, one word per line. No header, no escaping.
pub struct FileLog {
    path: PathBuf,
    // Opened lazily on the first append so that a store over a read-only
    // location can still be constructed and queried.
    file: Option<File>,
}

impl FileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    fn writer(&mut self) -> Result<&mut File, LogError> {
        let file = match self.file.take() {
            Some(file) => file,
            None => OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?,
        };
        Ok(self.file.insert(file))
    }
}

impl WordLog for FileLog {
    /// A missing file reads as an empty log; a non-UTF-8 file is corrupt.
    fn read_all(&mut self) -> Result<Vec<String>, LogError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let text = String::from_utf8(bytes).map_err(|e| LogError::Corrupt {
            offset: e.utf8_error().valid_up_to(),
        })?;
        Ok(text.lines().map(str::to_owned).collect())
    }

    fn append(&mut self, word: &str) -> Result<(), LogError> {
        let file = self.writer()?;
        file.write_all(word.as_bytes())?;
        file.write_all(b"\n")?;
        file.sync_data()?;
        Ok(())
    }
}

/// In-process log for ephemeral stores and tests.
#[derive(Default)]
pub struct MemoryLog {
    records: Vec<String>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordLog for MemoryLog {
    fn read_all(&mut self) -> Result<Vec<String>, LogError> {
        Ok(self.records.clone())
    }

    fn append(&mut self, word: &str) -> Result<(), LogError> {
        self.records.push(word.to_owned());
        Ok(())
    }
}
