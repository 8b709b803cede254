//! In-memory lock store implementation.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, Mutex};

use resource_mutex_core::error::LockResult;
use resource_mutex_core::record::LockRecord;
use resource_mutex_core::store::LockStore;

/// Store keeping lock records in a shared in-process map.
///
/// Clones share the same map, so any number of mutexes built over clones of
/// one store contend against each other. Claim-if-absent is atomic within
/// the process: the map is consulted and written under a single guard.
#[derive(Debug, Clone, Default)]
pub struct MemoryLockStore {
    records: Arc<Mutex<HashMap<String, LockRecord>>>,
}

impl MemoryLockStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LockStore for MemoryLockStore {
    async fn find(&self, key: &str) -> LockResult<Option<LockRecord>> {
        let records = self.records.lock().expect("lock table poisoned");
        Ok(records.get(key).cloned())
    }

    async fn create(&self, record: &LockRecord) -> LockResult<bool> {
        let mut records = self.records.lock().expect("lock table poisoned");
        match records.entry(record.storage_key()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(vacant) => {
                vacant.insert(record.clone());
                Ok(true)
            }
        }
    }

    async fn replace(&self, record: &LockRecord) -> LockResult<()> {
        let mut records = self.records.lock().expect("lock table poisoned");
        records.insert(record.storage_key(), record.clone());
        Ok(())
    }

    async fn delete(&self, key: &str) -> LockResult<()> {
        let mut records = self.records.lock().expect("lock table poisoned");
        records.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, held_by: &str) -> LockRecord {
        LockRecord::new("environment", id, held_by)
    }

    #[tokio::test]
    async fn test_create_claims_once() {
        let store = MemoryLockStore::new();

        assert!(store.create(&record("staging", "a")).await.unwrap());
        assert!(!store.create(&record("staging", "b")).await.unwrap());

        let current = store.find("environment-staging").await.unwrap().unwrap();
        assert_eq!(current.held_by, "a");
    }

    #[tokio::test]
    async fn test_replace_overwrites_holder() {
        let store = MemoryLockStore::new();

        assert!(store.create(&record("staging", "a")).await.unwrap());
        store.replace(&record("staging", "b")).await.unwrap();

        let current = store.find("environment-staging").await.unwrap().unwrap();
        assert_eq!(current.held_by, "b");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryLockStore::new();

        store.create(&record("staging", "a")).await.unwrap();
        store.delete("environment-staging").await.unwrap();
        store.delete("environment-staging").await.unwrap();

        assert!(store.find("environment-staging").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let store = MemoryLockStore::new();
        let other = store.clone();

        store.create(&record("staging", "a")).await.unwrap();
        assert!(!other.create(&record("staging", "b")).await.unwrap());
    }
}
