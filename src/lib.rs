//! Spaced repetition scheduling for vocabulary study.
//!
//! [`srs`] holds the scheduler and the queries over learning records,
//! [`storage`] the key-value persistence they are loaded from and saved to.

pub mod config;
pub mod srs;
pub mod storage;
pub mod vocabulary;

pub use config::Config;
pub use srs::{
    compute_next_review, due_words, study_stats, DueWord, Familiarity, LearningRecord,
    RecordCollection, ReviewSession, StudyStats,
};
pub use storage::{FileStore, KeyValueStore, LearningStore, MemoryStore, StorageError};
pub use vocabulary::{StudyMode, Vocabulary, Word};
