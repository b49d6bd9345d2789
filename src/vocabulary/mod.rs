//! Word list loading and study-mode filtering
//!
//! The word list is a `vocabulary.json` document:
//! ```json
//! { "words": [{ "english": "river", "chinese": "河流" }], "last_updated": "..." }
//! ```

mod models;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::srs::{due_words, RecordCollection};

pub use models::{StudyMode, Word};

#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The full word list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    pub words: Vec<Word>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl Vocabulary {
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            last_updated: None,
        }
    }

    /// Load a word list from a JSON file
    pub fn load(path: &Path) -> Result<Self, VocabularyError> {
        let content = fs::read_to_string(path)?;
        let vocabulary: Vocabulary = serde_json::from_str(&content)?;
        log::debug!("Loaded {} words from {}", vocabulary.words.len(), path.display());
        Ok(vocabulary)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words to study in `mode`, in word-list order
    pub fn filter(&self, mode: StudyMode, records: &RecordCollection, now: DateTime<Utc>) -> Vec<&Word> {
        match mode {
            StudyMode::Due => {
                let due: HashSet<String> = due_words(records, now).into_iter().map(|d| d.word).collect();
                self.words.iter().filter(|w| due.contains(&w.english)).collect()
            }
            StudyMode::New => self
                .words
                .iter()
                .filter(|w| !records.contains_key(&w.english))
                .collect(),
            StudyMode::All => self.words.iter().collect(),
        }
    }
}
