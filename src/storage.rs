//! Persistence of finished donation records.
//!
//! The wizard depends on the [`CatStore`] trait rather than a concrete
//! storage mechanism, so the JSON file store can later be swapped for a
//! network-backed API without touching the wizard.

/// The persisted record shape.
pub mod record;
pub use record::{GoodWith, Location, Owner, PersistedCat, DEFAULT_OWNER_AVATAR};

mod json;
pub use json::JsonStore;

/// Append-only repository of donation records.
///
/// Records are created exactly once, at successful submission, and never
/// mutated or deleted afterwards.
pub trait CatStore {
    /// Append one record to the collection.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the collection cannot be read or
    /// written.
    fn append(&mut self, cat: record::PersistedCat) -> Result<(), StoreError>;

    /// All records, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the collection cannot be read.
    fn list_all(&self) -> Result<Vec<record::PersistedCat>, StoreError>;
}

/// Error raised by a [`CatStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying storage could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The stored collection could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// An in-memory store.
///
/// Used by tests and as a stand-in wherever no durable storage is
/// wanted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    cats: Vec<record::PersistedCat>,
}

impl CatStore for MemoryStore {
    fn append(&mut self, cat: record::PersistedCat) -> Result<(), StoreError> {
        self.cats.push(cat);
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<record::PersistedCat>, StoreError> {
        Ok(self.cats.clone())
    }
}
