//! Test doubles: a store that records traffic and a probe that counts
//! attempts.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use resource_mutex::{LockError, LockProbe, LockRecord, LockResult, LockStore, MemoryLockStore};

#[derive(Default)]
struct OpCounts {
    finds: AtomicUsize,
    creates: AtomicUsize,
    replaces: AtomicUsize,
    deletes: AtomicUsize,
}

/// Store wrapper that counts every operation and can be told to fail
/// writes or deletes, for exercising the boolean-collapse contract.
#[derive(Clone, Default)]
pub struct RecordingStore {
    inner: MemoryLockStore,
    counts: Arc<OpCounts>,
    fail_writes: Arc<AtomicBool>,
    fail_deletes: Arc<AtomicBool>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent `create`/`replace` calls fail.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Makes subsequent `delete` calls fail.
    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }

    pub fn creates(&self) -> usize {
        self.counts.creates.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.counts.deletes.load(Ordering::SeqCst)
    }

    /// Total operations of any kind seen by the store.
    pub fn total_calls(&self) -> usize {
        self.counts.finds.load(Ordering::SeqCst)
            + self.counts.creates.load(Ordering::SeqCst)
            + self.counts.replaces.load(Ordering::SeqCst)
            + self.counts.deletes.load(Ordering::SeqCst)
    }

    fn injected_failure(what: &str) -> LockError {
        LockError::Store(Box::new(std::io::Error::other(format!(
            "injected {what} failure"
        ))))
    }
}

impl LockStore for RecordingStore {
    async fn find(&self, key: &str) -> LockResult<Option<LockRecord>> {
        self.counts.finds.fetch_add(1, Ordering::SeqCst);
        self.inner.find(key).await
    }

    async fn create(&self, record: &LockRecord) -> LockResult<bool> {
        self.counts.creates.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::injected_failure("write"));
        }
        self.inner.create(record).await
    }

    async fn replace(&self, record: &LockRecord) -> LockResult<()> {
        self.counts.replaces.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::injected_failure("write"));
        }
        self.inner.replace(record).await
    }

    async fn delete(&self, key: &str) -> LockResult<()> {
        self.counts.deletes.fetch_add(1, Ordering::SeqCst);
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(Self::injected_failure("delete"));
        }
        self.inner.delete(key).await
    }
}

/// Probe counting how often each attempt hook fired.
#[derive(Clone, Default)]
pub struct CountingProbe {
    lock_attempts: Arc<AtomicUsize>,
    unlock_attempts: Arc<AtomicUsize>,
}

impl CountingProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock_attempts(&self) -> usize {
        self.lock_attempts.load(Ordering::SeqCst)
    }

    pub fn unlock_attempts(&self) -> usize {
        self.unlock_attempts.load(Ordering::SeqCst)
    }
}

impl LockProbe for CountingProbe {
    fn on_lock_attempt(&self, _name: &str) {
        self.lock_attempts.fetch_add(1, Ordering::SeqCst);
    }

    fn on_unlock_attempt(&self, _name: &str) {
        self.unlock_attempts.fetch_add(1, Ordering::SeqCst);
    }
}
