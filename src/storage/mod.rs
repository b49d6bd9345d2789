//! Persistence collaborators for learning data
//!
//! The scheduler never touches storage itself. Callers load the record
//! collection through a [`LearningStore`], apply rating events, and save
//! it back. The store sits on any [`KeyValueStore`]: a directory of JSON
//! files for the CLI, or memory for tests and embedders.

pub mod backup;
mod file_storage;
mod learning_store;
mod memory;
mod models;

pub use file_storage::{FileStore, Result, StorageError};
pub use learning_store::LearningStore;
pub use memory::MemoryStore;
pub use models::*;

/// Named string documents with get/set semantics
pub trait KeyValueStore {
    /// Read a document, `None` if it was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a document, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    /// Remove every document in the store
    fn clear(&self) -> Result<()>;
}
