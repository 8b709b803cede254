//! Distributed mutex over a shared document store.

use std::future::Future;
use std::sync::Arc;

use tracing::{Span, instrument, warn};
use uuid::Uuid;

use crate::error::{LockError, LockResult, SynchronizeError};
use crate::options::SynchronizeOptions;
use crate::probe::{LockProbe, TracingProbe};
use crate::record::{LockRecord, PERMITTED_LOCK_TYPES};
use crate::store::LockStore;

/// Builder for a [`ResourceMutex`].
///
/// Construction never touches the store; the store is bound last via
/// [`build`](ResourceMutexBuilder::build).
pub struct ResourceMutexBuilder {
    resource_type: String,
    resource_id: String,
    held_by: Option<String>,
    permitted_types: Vec<String>,
    force: bool,
    dry_run: bool,
    probe: Arc<dyn LockProbe>,
}

impl ResourceMutexBuilder {
    /// Starts a builder for the given `{resource_type: resource_id}`
    /// pairing.
    pub fn new(resource_type: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            held_by: None,
            permitted_types: PERMITTED_LOCK_TYPES.iter().map(|t| t.to_string()).collect(),
            force: false,
            dry_run: false,
            probe: Arc::new(TracingProbe),
        }
    }

    /// Sets the client identity recorded on claimed locks.
    ///
    /// Defaults to a fresh UUID. Used for diagnostics only.
    pub fn held_by(mut self, held_by: impl Into<String>) -> Self {
        self.held_by = Some(held_by.into());
        self
    }

    /// Enables force-override: claim the lock despite an existing holder.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Enables dry-run mode: lock operations report success without any
    /// store I/O, so calling code can be exercised without a live store.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Installs an instrumentation probe for attempt hooks.
    pub fn probe(mut self, probe: impl LockProbe + 'static) -> Self {
        self.probe = Arc::new(probe);
        self
    }

    /// Overrides the permitted resource types.
    pub fn permitted_types(mut self, types: &[impl AsRef<str>]) -> Self {
        self.permitted_types = types.iter().map(|t| t.as_ref().to_string()).collect();
        self
    }

    /// Binds a store and builds the mutex.
    pub fn build<S: LockStore>(self, store: S) -> ResourceMutex<S> {
        let held_by = self
            .held_by
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let record = LockRecord::new(&self.resource_type, &self.resource_id, &held_by);
        let name = record.name();
        let storage_key = record.storage_key();

        ResourceMutex {
            store,
            resource_type: self.resource_type,
            resource_id: self.resource_id,
            held_by,
            permitted_types: self.permitted_types,
            force: self.force,
            dry_run: self.dry_run,
            probe: self.probe,
            name,
            storage_key,
        }
    }
}

/// A mutex coordinating exclusive access to one named resource across
/// independent processes, arbitrated by a shared store.
///
/// Each instance is used by a single logical caller; contention happens
/// *across* instances (and processes) addressing the same storage key.
/// There is no ownership enforcement: any mutex addressing a resource may
/// unlock it or, with `force`, replace its holder. There is also no retry,
/// lease, or timeout here; callers wanting bounded waiting wrap
/// [`lock`](ResourceMutex::lock) themselves.
pub struct ResourceMutex<S> {
    store: S,
    resource_type: String,
    resource_id: String,
    held_by: String,
    permitted_types: Vec<String>,
    force: bool,
    dry_run: bool,
    probe: Arc<dyn LockProbe>,
    name: String,
    storage_key: String,
}

impl<S: LockStore> ResourceMutex<S> {
    /// Creates a mutex with default settings.
    ///
    /// Convenience for [`ResourceMutexBuilder`].
    pub fn new(
        store: S,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        ResourceMutexBuilder::new(resource_type, resource_id).build(store)
    }

    /// Caller-facing handle identity (`type:id`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The store's primary key for this resource (`type-id`).
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Resource kind being protected.
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Specific resource instance being protected.
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// Client identity recorded on claims.
    pub fn held_by(&self) -> &str {
        &self.held_by
    }

    /// Whether claims override an existing holder.
    pub fn is_force(&self) -> bool {
        self.force
    }

    /// Changes the force flag on an existing handle.
    pub fn set_force(&mut self, force: bool) {
        self.force = force;
    }

    /// Attempts to claim the resource.
    ///
    /// Returns `Ok(true)` when this call claimed the lock, `Ok(false)` when
    /// another holder exists (without `force`) or the store rejected the
    /// write, and `Err(InvalidLockType)` when the resource type is not
    /// permitted. At most one store write is performed per call.
    ///
    /// Claiming is a single conditional write: with `force` unset the store
    /// creates the record only if none exists, so two contending callers
    /// can never both observe success. With `force` set the record is
    /// replaced unconditionally, ignoring the prior holder.
    #[instrument(skip(self), fields(lock.name = %self.name, force = self.force, acquired = tracing::field::Empty))]
    pub async fn lock(&self) -> LockResult<bool> {
        self.probe.on_lock_attempt(&self.name);

        if !self.is_permitted_type() {
            return Err(LockError::InvalidLockType(self.resource_type.clone()));
        }

        if self.dry_run {
            return Ok(true);
        }

        let record = self.record();
        let acquired = if self.force {
            match self.store.replace(&record).await {
                Ok(()) => true,
                Err(error) => {
                    warn!(lock.name = %self.name, %error, "forced lock write failed");
                    false
                }
            }
        } else {
            match self.store.create(&record).await {
                Ok(created) => created,
                Err(error) => {
                    warn!(lock.name = %self.name, %error, "lock write failed");
                    false
                }
            }
        };

        Span::current().record("acquired", acquired);
        Ok(acquired)
    }

    /// Releases the resource.
    ///
    /// Fire-and-forget with respect to ownership: no check is made that
    /// this handle (or anyone) holds the lock, and deleting an absent
    /// record is not an error. Returns `false` only when the store rejects
    /// the delete.
    #[instrument(skip(self), fields(lock.name = %self.name))]
    pub async fn unlock(&self) -> bool {
        self.probe.on_unlock_attempt(&self.name);

        if self.dry_run {
            return true;
        }

        match self.store.delete(&self.storage_key).await {
            Ok(()) => true,
            Err(error) => {
                warn!(lock.name = %self.name, %error, "unlock delete failed");
                false
            }
        }
    }

    /// Reads the current lock record for this resource, if any.
    ///
    /// Diagnostics only; the claim path never reads before writing.
    pub async fn holder(&self) -> LockResult<Option<LockRecord>> {
        if self.dry_run {
            return Ok(None);
        }
        self.store.find(&self.storage_key).await
    }

    /// Runs `work` with the lock held, releasing afterwards.
    ///
    /// Equivalent to [`synchronize_with`](Self::synchronize_with) with
    /// default options.
    pub async fn synchronize<F, Fut, T, E>(&self, work: F) -> Result<T, SynchronizeError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::error::Error,
    {
        self.synchronize_with(SynchronizeOptions::default(), work)
            .await
    }

    /// Runs `work` with the lock held, releasing per `options`.
    ///
    /// Fails with [`LockError::ResourceLocked`] when the lock cannot be
    /// acquired; `work` is then never invoked and nothing is released. On
    /// work failure the lock is released unless
    /// `options.unlock_on_failure` is false, and the failure propagates
    /// unchanged either way.
    #[instrument(skip(self, options, work), fields(lock.name = %self.name))]
    pub async fn synchronize_with<F, Fut, T, E>(
        &self,
        options: SynchronizeOptions,
        work: F,
    ) -> Result<T, SynchronizeError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::error::Error,
    {
        if !self.lock().await? {
            let held_by = match self.holder().await {
                Ok(Some(current)) => current.held_by,
                _ => String::from("unknown client"),
            };
            return Err(SynchronizeError::Lock(LockError::ResourceLocked {
                name: self.name.clone(),
                held_by,
            }));
        }

        match work().await {
            Ok(value) => {
                self.unlock().await;
                Ok(value)
            }
            Err(failure) => {
                if options.unlock_on_failure {
                    self.unlock().await;
                }
                Err(SynchronizeError::Work(failure))
            }
        }
    }

    fn is_permitted_type(&self) -> bool {
        self.permitted_types
            .iter()
            .any(|permitted| permitted == &self.resource_type)
    }

    fn record(&self) -> LockRecord {
        LockRecord::new(&self.resource_type, &self.resource_id, &self.held_by)
    }
}
