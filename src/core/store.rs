//! Store trait for record collections
//!
//! Handlers never touch a collection directly; they receive an
//! `Arc<dyn Store<T>>` through their router state. Tests build a fresh store
//! per case to stay isolated.

use crate::core::entity::Record;

/// Insertion-ordered collection of records
pub trait Store<T: Record>: Send + Sync {
    /// All records, in insertion order
    fn list(&self) -> Vec<T>;

    /// Find a record by identifier
    fn find(&self, id: &str) -> Option<T>;

    /// Allocate an identifier not currently held by this store
    fn next_id(&self) -> String;

    /// Append a record
    fn insert(&self, record: T) -> T;

    /// Replace the record sharing `record.id()`
    ///
    /// Returns `None` when no such record exists.
    fn replace(&self, record: T) -> Option<T>;

    /// Remove a record by identifier, returning it
    fn remove(&self, id: &str) -> Option<T>;

    /// Number of records held
    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
