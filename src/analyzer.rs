//! Add-then-match glue between the store and the two searches.
//!
//! This is the whole surface the service boundary needs: submit a word,
//! get back the closest vocabulary words by value and by lexical order.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::matcher::{find_closest_by_lexical, find_closest_by_value};
use crate::store::VocabularyStore;
use crate::wordlog::LogError;

/// Result of analyzing one submitted word.
pub struct Analysis {
    /// Whether the word was new to the vocabulary.
    pub accepted: bool,
    /// Closest vocabulary word by character-code value.
    pub value: String,
    /// Closest vocabulary word by lexical order.
    pub lexical: String,
}

/// Wire shape of an analyze request: `{"text": "<word>"}`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Wire shape of an analyze response: `{"value": "...", "lexical": "..."}`.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub value: String,
    pub lexical: String,
}

impl From<Analysis> for AnalyzeResponse {
    fn from(analysis: Analysis) -> Self {
        Self {
            value: analysis.value,
            lexical: analysis.lexical,
        }
    }
}

/// Record `word` in the store (if new) and match it against the resulting
/// vocabulary.
///
/// The snapshot is taken after the add, so it always contains `word`
/// itself and both searches always find a match.
pub fn analyze(store: &VocabularyStore, word: &str) -> Result<Analysis, LogError> {
    let accepted = store.add(word)?;
    let words = store.snapshot();

    let value = find_closest_by_value(word, &words)
        .unwrap_or_default()
        .to_owned();
    let lexical = find_closest_by_lexical(word, &words)
        .unwrap_or_default()
        .to_owned();

    info!(word, accepted, %value, %lexical, "analyzed word");
    Ok(Analysis {
        accepted,
        value,
        lexical,
    })
}
