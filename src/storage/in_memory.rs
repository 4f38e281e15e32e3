//! In-memory implementation of [`Store`] used by the server and the tests

use crate::core::entity::Record;
use crate::core::id::IdGenerator;
use crate::core::store::Store;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory record store
///
/// Records live in a `Vec` so `list` preserves insertion order. Lookups are
/// linear scans. Clones share the same underlying collection.
pub struct InMemoryStore<T: Record> {
    records: Arc<RwLock<Vec<T>>>,
    ids: Arc<IdGenerator>,
}

impl<T: Record> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store pre-populated with `records`
    ///
    /// Generated identifiers will be seeded above any numeric id in `records`.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            ids: Arc::new(IdGenerator::new()),
        }
    }

    /// Use a specific id generator (deterministic ids in tests)
    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Record> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            ids: self.ids.clone(),
        }
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Store<T> for InMemoryStore<T> {
    fn list(&self) -> Vec<T> {
        self.read().clone()
    }

    fn find(&self, id: &str) -> Option<T> {
        self.read().iter().find(|record| record.id() == id).cloned()
    }

    fn next_id(&self) -> String {
        let records = self.read();
        self.ids.next_id(records.iter().map(Record::id))
    }

    fn insert(&self, record: T) -> T {
        self.write().push(record.clone());
        record
    }

    fn replace(&self, record: T) -> Option<T> {
        let mut records = self.write();
        let slot = records.iter_mut().find(|held| held.id() == record.id())?;
        *slot = record.clone();
        Some(record)
    }

    fn remove(&self, id: &str) -> Option<T> {
        let mut records = self.write();
        let index = records.iter().position(|record| record.id() == id)?;
        Some(records.remove(index))
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
