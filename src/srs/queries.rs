//! Read-only queries over the full record collection

use chrono::{DateTime, Utc};

use super::models::{DueWord, Familiarity, LearningRecord, RecordCollection, StudyStats};

/// Every record that is due at `now`, paired with its word.
///
/// Records that were never scheduled are always due. The result follows
/// the collection's iteration order; sort explicitly if order matters.
pub fn due_words(records: &RecordCollection, now: DateTime<Utc>) -> Vec<DueWord> {
    records
        .iter()
        .filter(|(_, record)| record.is_due_at(now))
        .map(|(word, record)| DueWord {
            word: word.clone(),
            record: record.clone(),
        })
        .collect()
}

/// Mastery band counts, with due items counted against the current time
pub fn study_stats(records: &RecordCollection) -> StudyStats {
    study_stats_at(records, Utc::now())
}

/// Mastery band counts, with due items counted against `now`
pub fn study_stats_at(records: &RecordCollection, now: DateTime<Utc>) -> StudyStats {
    let mut stats = StudyStats {
        total: records.len(),
        ..Default::default()
    };

    for record in records.values() {
        if is_learning(record) {
            stats.learning += 1;
        } else if is_in_review(record) {
            stats.review += 1;
        } else if record.familiarity == Familiarity::Perfect.value() {
            stats.mastered += 1;
        }
    }

    stats.due_today = due_words(records, now).len();
    stats
}

fn is_learning(record: &LearningRecord) -> bool {
    record.familiarity < Familiarity::Good.value()
}

fn is_in_review(record: &LearningRecord) -> bool {
    record.familiarity >= Familiarity::Good.value()
        && record.familiarity < Familiarity::Perfect.value()
}
