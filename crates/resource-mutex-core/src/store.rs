//! Remote store contract consumed by the mutex.

use std::future::Future;

use crate::error::LockResult;
use crate::record::LockRecord;

/// Client for the shared document store that arbitrates lock ownership.
///
/// The store is the only true source of mutual exclusion: every guarantee
/// the mutex offers reduces to the atomicity of [`create`](LockStore::create)
/// for a single storage key. Implementations decide where that atomicity
/// comes from (a unique primary-key index, `SET NX`, a process-local map
/// guard).
///
/// All methods return typed results; callers that only need the boolean
/// claim outcome (the mutex) collapse errors themselves.
pub trait LockStore: Send + Sync {
    /// Fetches the record at `key`, if one exists.
    fn find(&self, key: &str) -> impl Future<Output = LockResult<Option<LockRecord>>> + Send;

    /// Writes `record` only if no record exists at its storage key.
    ///
    /// Must be atomic: two concurrent calls for the same key must never
    /// both return `true`. Returns `false` when a record is already
    /// present, leaving it untouched.
    fn create(&self, record: &LockRecord) -> impl Future<Output = LockResult<bool>> + Send;

    /// Unconditionally writes `record`, replacing any record at its key.
    ///
    /// Backs forced claims; provides no ordering guarantee relative to the
    /// previous holder.
    fn replace(&self, record: &LockRecord) -> impl Future<Output = LockResult<()>> + Send;

    /// Deletes the record at `key`.
    ///
    /// Deleting an absent record is not an error.
    fn delete(&self, key: &str) -> impl Future<Output = LockResult<()>> + Send;
}
