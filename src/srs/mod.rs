//! Spaced repetition for vocabulary
//!
//! This module provides:
//! - Interval scheduling for rating events
//! - Due-word selection and mastery band statistics
//! - Review sessions that merge rating events into stored records

pub mod algorithm;
pub mod models;
pub mod queries;
pub mod session;

pub use algorithm::{compute_next_review, compute_next_review_at, ReviewResult};
pub use models::*;
pub use queries::{due_words, study_stats, study_stats_at};
pub use session::ReviewSession;
