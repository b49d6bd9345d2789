//! Data models for the spaced repetition scheduler

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Learner's self-reported recall quality for a single rating event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Familiarity {
    /// Did not recognize the word at all
    Unknown = 0,
    /// Could not recall, or only with great effort
    Hard = 1,
    /// Recalled with some effort
    Good = 2,
    /// Recalled easily
    Easy = 3,
    /// Fully mastered
    Perfect = 4,
}

impl Familiarity {
    pub const ALL: [Familiarity; 5] = [
        Familiarity::Unknown,
        Familiarity::Hard,
        Familiarity::Good,
        Familiarity::Easy,
        Familiarity::Perfect,
    ];

    /// Map a stored rating value to a level, if it is one
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Unknown),
            1 => Some(Self::Hard),
            2 => Some(Self::Good),
            3 => Some(Self::Easy),
            4 => Some(Self::Perfect),
            _ => None,
        }
    }

    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
            Self::Perfect => "perfect",
        }
    }
}

impl fmt::Display for Familiarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Familiarity> for i32 {
    fn from(level: Familiarity) -> Self {
        level.value()
    }
}

/// Spaced repetition state for one vocabulary item.
///
/// Field names match the `learning_records` document written by the web
/// client, so exported backups load without conversion. `familiarity` is
/// kept as the raw stored integer: values outside 0..=4 survive a
/// load/save cycle unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningRecord {
    /// Most recent rating (0-4 for known levels)
    pub familiarity: i32,
    /// Rating events applied before the most recent one
    #[serde(default)]
    pub review_count: u32,
    /// Interval in days that produced `next_review`
    #[serde(default = "default_last_interval")]
    pub last_interval: f64,
    /// When the item is due again; `None` means due immediately
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_review: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
}

fn default_last_interval() -> f64 {
    1.0
}

impl Default for LearningRecord {
    /// State assumed for an item that has never been rated
    fn default() -> Self {
        Self {
            familiarity: Familiarity::Unknown.value(),
            review_count: 0,
            last_interval: default_last_interval(),
            next_review: None,
            last_reviewed: None,
        }
    }
}

impl LearningRecord {
    /// Typed view of the stored rating
    pub fn familiarity_level(&self) -> Option<Familiarity> {
        Familiarity::from_value(self.familiarity)
    }

    /// Check if the item is due at `now`
    pub fn is_due_at(&self, now: DateTime<Utc>) -> bool {
        match self.next_review {
            None => true,
            Some(next) => next <= now,
        }
    }
}

/// All learning records, keyed by the item's English headword
pub type RecordCollection = BTreeMap<String, LearningRecord>;

/// A due record paired with its identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueWord {
    pub word: String,
    #[serde(flatten)]
    pub record: LearningRecord,
}

/// Counts per mastery band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyStats {
    pub total: usize,
    pub learning: usize,
    pub review: usize,
    pub mastered: usize,
    pub due_today: usize,
}

impl StudyStats {
    /// Items in a vocabulary of `vocabulary_size` words that were never rated
    pub fn unseen(&self, vocabulary_size: usize) -> usize {
        vocabulary_size.saturating_sub(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_familiarity_values() {
        for level in Familiarity::ALL {
            assert_eq!(Familiarity::from_value(level.value()), Some(level));
        }
        assert_eq!(Familiarity::from_value(5), None);
        assert_eq!(Familiarity::from_value(-1), None);
    }

    #[test]
    fn test_record_json_matches_web_client() {
        let json = r#"{
            "familiarity": 2,
            "review_count": 1,
            "last_interval": 1,
            "next_review": "2024-03-02T10:00:00.000Z",
            "last_reviewed": "2024-03-01T10:00:00.000Z"
        }"#;
        let record: LearningRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.familiarity_level(), Some(Familiarity::Good));
        assert_eq!(record.review_count, 1);
        assert_eq!(record.last_interval, 1.0);
        assert!(record.next_review.is_some());

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("review_count").is_some());
        assert!(value.get("next_review").is_some());
    }

    #[test]
    fn test_missing_fields_use_new_item_defaults() {
        let record: LearningRecord = serde_json::from_str(r#"{"familiarity": 7}"#).unwrap();
        assert_eq!(record.familiarity, 7);
        assert_eq!(record.familiarity_level(), None);
        assert_eq!(record.review_count, 0);
        assert_eq!(record.last_interval, 1.0);
        assert_eq!(record.next_review, None);
    }

    #[test]
    fn test_unseen_saturates() {
        let stats = StudyStats {
            total: 12,
            ..Default::default()
        };
        assert_eq!(stats.unseen(20), 8);
        assert_eq!(stats.unseen(5), 0);
    }

    #[test]
    fn test_stats_json_uses_snake_case() {
        let value = serde_json::to_value(StudyStats::default()).unwrap();
        assert!(value.get("due_today").is_some());
        assert!(value.get("dueToday").is_none());
    }
}
