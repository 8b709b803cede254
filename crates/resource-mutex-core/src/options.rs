//! Options for scoped synchronization.

/// Release policy for [`synchronize`](crate::mutex::ResourceMutex::synchronize_with).
#[derive(Debug, Clone, Copy)]
pub struct SynchronizeOptions {
    /// Whether to release the lock when the protected work fails.
    ///
    /// Defaults to `true`. Set to `false` to keep the lock held for
    /// post-mortem inspection; the work's failure still propagates either
    /// way.
    pub unlock_on_failure: bool,
}

impl Default for SynchronizeOptions {
    fn default() -> Self {
        Self {
            unlock_on_failure: true,
        }
    }
}
