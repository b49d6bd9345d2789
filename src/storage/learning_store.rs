//! Typed access to the learning documents

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::file_storage::Result;
use super::models::{DailyStats, DAILY_STATS_KEY, LEARNING_RECORDS_KEY};
use super::KeyValueStore;
use crate::srs::RecordCollection;

/// Loads and saves the record collection and daily stats as JSON documents.
///
/// Missing documents load as empty. Malformed documents are an error,
/// so a later save never silently replaces data that failed to parse.
pub struct LearningStore<S> {
    store: S,
}

impl<S: KeyValueStore> LearningStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying key-value store
    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn load_records(&self) -> Result<RecordCollection> {
        self.load_document(LEARNING_RECORDS_KEY)
    }

    pub fn save_records(&self, records: &RecordCollection) -> Result<()> {
        self.save_document(LEARNING_RECORDS_KEY, records)
    }

    pub fn load_daily_stats(&self) -> Result<DailyStats> {
        self.load_document(DAILY_STATS_KEY)
    }

    pub fn save_daily_stats(&self, stats: &DailyStats) -> Result<()> {
        self.save_document(DAILY_STATS_KEY, stats)
    }

    /// Delete all learning data
    pub fn clear(&self) -> Result<()> {
        self.store.clear()?;
        log::info!("Cleared all learning data");
        Ok(())
    }

    fn load_document<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        match self.store.get(key)? {
            Some(content) => Ok(serde_json::from_str(&content)?),
            None => Ok(T::default()),
        }
    }

    fn save_document<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(value)?;
        self.store.set(key, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srs::LearningRecord;
    use crate::storage::{DayStats, FileStore, MemoryStore, StorageError};
    use tempfile::TempDir;

    #[test]
    fn test_missing_documents_load_empty() {
        let store = LearningStore::new(MemoryStore::new());
        assert!(store.load_records().unwrap().is_empty());
        assert!(store.load_daily_stats().unwrap().is_empty());
    }

    #[test]
    fn test_records_round_trip_through_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = LearningStore::new(FileStore::new(temp_dir.path().to_path_buf()));

        let mut records = RecordCollection::new();
        records.insert(
            "apple".to_string(),
            LearningRecord {
                familiarity: 3,
                review_count: 2,
                last_interval: 7.0,
                ..Default::default()
            },
        );
        store.save_records(&records).unwrap();

        // Re-open to make sure nothing is cached
        let reopened = LearningStore::new(FileStore::new(temp_dir.path().to_path_buf()));
        assert_eq!(reopened.load_records().unwrap(), records);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let store = LearningStore::new(MemoryStore::new());
        store.inner().set(LEARNING_RECORDS_KEY, "not json").unwrap();

        assert!(matches!(store.load_records(), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_clear() {
        let store = LearningStore::new(MemoryStore::new());
        let mut stats = DailyStats::new();
        stats.insert("2024-03-01".to_string(), DayStats::default());
        store.save_daily_stats(&stats).unwrap();

        store.clear().unwrap();
        assert!(store.load_daily_stats().unwrap().is_empty());
    }
}
