//! Review interval scheduling
//!
//! A simplified SM-2 style policy. Failed recalls (unknown/hard) always
//! collapse to a short relearning interval. Successful recalls use fixed
//! bootstrap intervals for the first reviews, then grow the previous
//! interval by a rating-dependent multiplier:
//!
//! | rating  | 1st review | 2nd review | later          |
//! |---------|------------|------------|----------------|
//! | good    | 1 day      | 3 days     | last x 1.5     |
//! | easy    | 3 days     | 7 days     | last x 2       |
//! | perfect | 7 days     | last x 2.5 | last x 2.5     |
//!
//! There is no ease factor, and no cap on growth other than saturating at
//! `f64::MAX` days so intervals stay finite and serializable.

use chrono::{DateTime, Duration, Utc};

use super::models::Familiarity;

/// Interval used after a failed recall (6 hours)
pub const RELEARN_INTERVAL_DAYS: f64 = 0.25;

/// Interval used for ratings outside the known levels
pub const FALLBACK_INTERVAL_DAYS: f64 = 1.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Result of scheduling one rating event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewResult {
    pub interval_days: f64,
    pub next_review: DateTime<Utc>,
}

/// Interval in days for a rating, given the item's review history.
///
/// `review_count` is the number of rating events applied before this one
/// and `last_interval` the interval they produced. Negative or zero
/// intervals are outside the contract and pass through the growth
/// formulas unchanged. Growth saturates at `f64::MAX` days.
pub fn next_interval(rating: i32, review_count: u32, last_interval: f64) -> f64 {
    let Some(level) = Familiarity::from_value(rating) else {
        return FALLBACK_INTERVAL_DAYS;
    };

    match (level, review_count) {
        (Familiarity::Unknown | Familiarity::Hard, _) => RELEARN_INTERVAL_DAYS,
        (Familiarity::Good, 0) => 1.0,
        (Familiarity::Good, 1) => 3.0,
        (Familiarity::Good, _) => grow(last_interval, 1.5),
        (Familiarity::Easy, 0) => 3.0,
        (Familiarity::Easy, 1) => 7.0,
        (Familiarity::Easy, _) => grow(last_interval, 2.0),
        (Familiarity::Perfect, 0) => 7.0,
        (Familiarity::Perfect, _) => grow(last_interval, 2.5),
    }
}

/// Multiplicative growth clamped to the finite range; JSON cannot hold infinities
fn grow(last_interval: f64, factor: f64) -> f64 {
    (last_interval * factor).clamp(-f64::MAX, f64::MAX)
}

/// Calculate the next review relative to the current time
pub fn compute_next_review(rating: i32, review_count: u32, last_interval: f64) -> ReviewResult {
    compute_next_review_at(rating, review_count, last_interval, Utc::now())
}

/// Calculate the next review relative to `now`
pub fn compute_next_review_at(
    rating: i32,
    review_count: u32,
    last_interval: f64,
    now: DateTime<Utc>,
) -> ReviewResult {
    let interval_days = next_interval(rating, review_count, last_interval);
    let next_review = add_days(now, interval_days);

    log::debug!(
        "Scheduled rating {} (review #{}, last {}d) -> {}d",
        rating,
        review_count,
        last_interval,
        interval_days
    );

    ReviewResult {
        interval_days,
        next_review,
    }
}

/// Offset a timestamp by a fractional number of days, at millisecond
/// precision. Saturates at the representable range.
fn add_days(now: DateTime<Utc>, days: f64) -> DateTime<Utc> {
    let millis = (days * MILLIS_PER_DAY).round();
    let saturated = if millis.is_sign_negative() {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    };

    // `as` saturates for out-of-range floats and maps NaN to 0
    Duration::try_milliseconds(millis as i64)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(saturated)
}

/// Interval each known rating would produce, in `Familiarity::ALL` order.
/// Used to show the learner what each answer does before they pick one.
pub fn preview_intervals(review_count: u32, last_interval: f64) -> [f64; 5] {
    Familiarity::ALL.map(|level| next_interval(level.value(), review_count, last_interval))
}

/// Format an interval in days to a short human-readable string
pub fn format_interval(days: f64) -> String {
    if days < 1.0 {
        let hours = (days * 24.0).round() as i64;
        return if hours <= 0 {
            "now".to_string()
        } else {
            format!("{}h", hours)
        };
    }

    let days = days.round() as i64;
    if days < 7 {
        format!("{}d", days)
    } else if days < 30 {
        format!("{}w", days / 7)
    } else if days < 365 {
        format!("{}mo", days / 30)
    } else {
        format!("{}y", days / 365)
    }
}
