//! Applying rating events to stored learning data

use chrono::{DateTime, Utc};

use super::algorithm::compute_next_review_at;
use super::models::LearningRecord;
use crate::storage::{day_key, ActivityKind, DailyStats, KeyValueStore, LearningStore, Result};

/// Applies rating events against a learning store.
///
/// Each call is a full load-modify-save of the collection with no version
/// check: if two sessions rate the same word from the same stale read,
/// the later save wins.
pub struct ReviewSession<'a, S> {
    store: &'a LearningStore<S>,
}

impl<'a, S: KeyValueStore> ReviewSession<'a, S> {
    pub fn new(store: &'a LearningStore<S>) -> Self {
        Self { store }
    }

    /// Record a rating for `word` at `now` and return the updated record.
    ///
    /// Both documents are loaded before anything is written, so a load
    /// failure leaves the store untouched.
    pub fn rate(&self, word: &str, rating: i32, now: DateTime<Utc>) -> Result<LearningRecord> {
        let mut records = self.store.load_records()?;
        let mut stats = self.store.load_daily_stats()?;

        let is_new = !records.contains_key(word);
        let current = records.get(word).cloned().unwrap_or_default();

        let result = compute_next_review_at(rating, current.review_count, current.last_interval, now);

        let updated = LearningRecord {
            familiarity: rating,
            review_count: current.review_count.saturating_add(1),
            last_interval: result.interval_days,
            next_review: Some(result.next_review),
            last_reviewed: Some(now),
        };
        records.insert(word.to_string(), updated.clone());

        bump(&mut stats, ActivityKind::Reviewed, now);
        if is_new {
            bump(&mut stats, ActivityKind::NewWords, now);
        }

        self.store.save_records(&records)?;
        self.store.save_daily_stats(&stats)?;

        log::info!(
            "Rated '{}' {} (review #{}), next in {}d",
            word,
            rating,
            updated.review_count,
            updated.last_interval
        );

        Ok(updated)
    }

    /// Increment today's counter for `kind`
    pub fn log_activity(&self, kind: ActivityKind, now: DateTime<Utc>) -> Result<()> {
        let mut stats = self.store.load_daily_stats()?;
        bump(&mut stats, kind, now);
        self.store.save_daily_stats(&stats)
    }
}

fn bump(stats: &mut DailyStats, kind: ActivityKind, now: DateTime<Utc>) {
    stats
        .entry(day_key(now.date_naive()))
        .or_default()
        .increment(kind, 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srs::{due_words, study_stats_at, Familiarity};
    use crate::storage::{MemoryStore, StorageError, DAILY_STATS_KEY};
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_three_good_ratings() {
        let store = LearningStore::new(MemoryStore::new());
        let session = ReviewSession::new(&store);
        let mut now = start();

        let first = session.rate("apple", Familiarity::Good.value(), now).unwrap();
        assert_eq!(first.last_interval, 1.0);
        assert_eq!(first.review_count, 1);
        assert_eq!(first.next_review, Some(now + Duration::hours(24)));
        assert_eq!(first.last_reviewed, Some(now));

        now = now + Duration::days(1);
        let second = session.rate("apple", Familiarity::Good.value(), now).unwrap();
        assert_eq!(second.last_interval, 3.0);
        assert_eq!(second.review_count, 2);

        now = now + Duration::days(3);
        let third = session.rate("apple", Familiarity::Good.value(), now).unwrap();
        assert_eq!(third.last_interval, 4.5);
        assert_eq!(third.review_count, 3);

        assert_eq!(store.load_records().unwrap()["apple"], third);
    }

    #[test]
    fn test_failed_rating_still_counts() {
        let store = LearningStore::new(MemoryStore::new());
        let session = ReviewSession::new(&store);
        let now = start();

        session.rate("cloud", Familiarity::Easy.value(), now).unwrap();
        let failed = session.rate("cloud", Familiarity::Hard.value(), now).unwrap();
        assert_eq!(failed.review_count, 2);
        assert_eq!(failed.last_interval, 0.25);

        // Growth resumes from the short interval instead of restarting
        let recovered = session.rate("cloud", Familiarity::Good.value(), now).unwrap();
        assert_eq!(recovered.last_interval, 0.375);
    }

    #[test]
    fn test_daily_counters() {
        let store = LearningStore::new(MemoryStore::new());
        let session = ReviewSession::new(&store);
        let now = start();

        session.rate("apple", Familiarity::Good.value(), now).unwrap();
        session.rate("apple", Familiarity::Easy.value(), now).unwrap();
        session.rate("pear", Familiarity::Unknown.value(), now).unwrap();
        session.log_activity(ActivityKind::SpeakingPractice, now).unwrap();

        let stats = store.load_daily_stats().unwrap();
        let today = &stats["2024-03-01"];
        assert_eq!(today.reviewed, 3);
        assert_eq!(today.new_words, 2);
        assert_eq!(today.speaking_practice, 1);
    }

    #[test]
    fn test_rated_words_feed_queries() {
        let store = LearningStore::new(MemoryStore::new());
        let session = ReviewSession::new(&store);
        let now = start();

        session.rate("apple", Familiarity::Perfect.value(), now).unwrap();
        session.rate("pear", Familiarity::Hard.value(), now).unwrap();

        let records = store.load_records().unwrap();
        let later = now + Duration::hours(7);
        let due: Vec<String> = due_words(&records, later).into_iter().map(|d| d.word).collect();
        assert_eq!(due, vec!["pear".to_string()]);

        let stats = study_stats_at(&records, later);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.mastered, 1);
        assert_eq!(stats.learning, 1);
        assert_eq!(stats.due_today, 1);
    }

    #[test]
    fn test_interval_growth_stays_loadable() {
        let store = LearningStore::new(MemoryStore::new());
        let mut records = crate::srs::RecordCollection::new();
        records.insert(
            "river".to_string(),
            LearningRecord {
                familiarity: Familiarity::Perfect.value(),
                review_count: 40,
                last_interval: 1e308,
                ..Default::default()
            },
        );
        store.save_records(&records).unwrap();

        let session = ReviewSession::new(&store);
        let rated = session.rate("river", Familiarity::Perfect.value(), start()).unwrap();
        assert_eq!(rated.last_interval, f64::MAX);

        let reloaded = store.load_records().unwrap();
        assert_eq!(reloaded["river"].last_interval, f64::MAX);
        assert_eq!(reloaded["river"].review_count, 41);
    }

    #[test]
    fn test_malformed_daily_stats_leaves_records_untouched() {
        let store = LearningStore::new(MemoryStore::new());
        let session = ReviewSession::new(&store);
        session.rate("pear", Familiarity::Good.value(), start()).unwrap();
        let before = store.load_records().unwrap();

        store.inner().set(DAILY_STATS_KEY, "not json").unwrap();
        let result = session.rate("apple", Familiarity::Good.value(), start());

        assert!(matches!(result, Err(StorageError::Json(_))));
        assert_eq!(store.load_records().unwrap(), before);
        assert!(!store.load_records().unwrap().contains_key("apple"));
    }
}
