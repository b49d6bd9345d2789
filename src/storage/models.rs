use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::srs::RecordCollection;

/// Store key for the learning record collection
pub const LEARNING_RECORDS_KEY: &str = "learning_records";

/// Store key for the per-day activity counters
pub const DAILY_STATS_KEY: &str = "daily_stats";

/// Kind of learning activity counted per day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// A rating event on any word
    Reviewed,
    /// A speaking practice attempt
    SpeakingPractice,
    /// The first rating event on a word
    NewWords,
}

/// Activity counters for a single day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStats {
    #[serde(default)]
    pub reviewed: u32,
    #[serde(default)]
    pub speaking_practice: u32,
    #[serde(default)]
    pub new_words: u32,
}

impl DayStats {
    pub fn increment(&mut self, kind: ActivityKind, by: u32) {
        let counter = match kind {
            ActivityKind::Reviewed => &mut self.reviewed,
            ActivityKind::SpeakingPractice => &mut self.speaking_practice,
            ActivityKind::NewWords => &mut self.new_words,
        };
        *counter = counter.saturating_add(by);
    }
}

/// Per-day counters keyed by UTC date (`YYYY-MM-DD`)
pub type DailyStats = BTreeMap<String, DayStats>;

/// Key used in [`DailyStats`] for a date
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// One row of the recent activity view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub reviewed: u32,
    pub speaking_practice: u32,
    pub new_words: u32,
}

/// Activity for the `days` days ending at `now`, oldest first.
/// Days without an entry are reported as zero.
pub fn recent_activity(stats: &DailyStats, now: DateTime<Utc>, days: u32) -> Vec<DayActivity> {
    let today = now.date_naive();
    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(i64::from(offset));
            let day = stats.get(&day_key(date)).copied().unwrap_or_default();
            DayActivity {
                date,
                reviewed: day.reviewed,
                speaking_practice: day.speaking_practice,
                new_words: day.new_words,
            }
        })
        .collect()
}

/// Full export of a learner's data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_records: Option<RecordCollection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_stats: Option<DailyStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
}
