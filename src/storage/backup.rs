//! Export and import of learning data as a single JSON file

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use super::file_storage::{Result, StorageError};
use super::learning_store::LearningStore;
use super::models::BackupBundle;
use super::KeyValueStore;

/// Default file name for a backup taken at `now`
pub fn default_backup_file_name(now: DateTime<Utc>) -> String {
    format!("runku-backup-{}.json", now.format("%Y-%m-%d"))
}

/// Snapshot everything in the store
pub fn export<S: KeyValueStore>(store: &LearningStore<S>, now: DateTime<Utc>) -> Result<BackupBundle> {
    Ok(BackupBundle {
        learning_records: Some(store.load_records()?),
        daily_stats: Some(store.load_daily_stats()?),
        exported_at: Some(now),
    })
}

/// Restore a bundle. Only the sections present in the bundle are replaced.
pub fn import<S: KeyValueStore>(store: &LearningStore<S>, bundle: &BackupBundle) -> Result<()> {
    if let Some(records) = &bundle.learning_records {
        store.save_records(records)?;
        log::info!("Imported {} learning records", records.len());
    }
    if let Some(stats) = &bundle.daily_stats {
        store.save_daily_stats(stats)?;
        log::info!("Imported daily stats for {} days", stats.len());
    }
    Ok(())
}

/// Write a bundle as pretty-printed JSON
pub fn write_backup(path: &Path, bundle: &BackupBundle) -> Result<()> {
    let content = serde_json::to_string_pretty(bundle)?;
    fs::write(path, content)?;
    Ok(())
}

/// Read a bundle, rejecting files that are not a backup object
pub fn read_backup(path: &Path) -> Result<BackupBundle> {
    let content = fs::read_to_string(path)?;
    parse_backup(&content)
}

fn parse_backup(content: &str) -> Result<BackupBundle> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| StorageError::InvalidBackup(e.to_string()))?;

    if !value.is_object() {
        return Err(StorageError::InvalidBackup("expected a JSON object".to_string()));
    }

    serde_json::from_value(value).map_err(|e| StorageError::InvalidBackup(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srs::{LearningRecord, RecordCollection};
    use crate::storage::{DailyStats, DayStats, MemoryStore};
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).unwrap()
    }

    fn populated_store() -> LearningStore<MemoryStore> {
        let store = LearningStore::new(MemoryStore::new());

        let mut records = RecordCollection::new();
        records.insert("river".to_string(), LearningRecord::default());
        store.save_records(&records).unwrap();

        let mut stats = DailyStats::new();
        stats.insert(
            "2024-03-05".to_string(),
            DayStats {
                reviewed: 3,
                ..Default::default()
            },
        );
        store.save_daily_stats(&stats).unwrap();
        store
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(default_backup_file_name(now()), "runku-backup-2024-03-05.json");
    }

    #[test]
    fn test_export_then_import_into_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("backup.json");

        let source = populated_store();
        let bundle = export(&source, now()).unwrap();
        write_backup(&path, &bundle).unwrap();

        let target = LearningStore::new(MemoryStore::new());
        import(&target, &read_backup(&path).unwrap()).unwrap();

        assert_eq!(target.load_records().unwrap(), source.load_records().unwrap());
        assert_eq!(target.load_daily_stats().unwrap()["2024-03-05"].reviewed, 3);
    }

    #[test]
    fn test_partial_bundle_keeps_other_section() {
        let store = populated_store();
        let bundle = parse_backup(r#"{"learning_records": {}}"#).unwrap();

        import(&store, &bundle).unwrap();

        assert!(store.load_records().unwrap().is_empty());
        assert_eq!(store.load_daily_stats().unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_backup_rejected() {
        for content in ["not json", "[1, 2]", r#"{"learning_records": 5}"#] {
            assert!(matches!(parse_backup(content), Err(StorageError::InvalidBackup(_))));
        }
    }
}
