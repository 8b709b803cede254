//! Instrumentation hooks for lock and unlock attempts.

/// Observes mutex attempts.
///
/// The mutex calls the matching hook at the start of every `lock` and
/// `unlock`, before validation and before any store access, independent of
/// the outcome. Probes are injected per mutex through the builder, so test
/// and production instances never interfere.
pub trait LockProbe: Send + Sync {
    /// Called when a lock attempt begins.
    fn on_lock_attempt(&self, name: &str) {
        let _ = name;
    }

    /// Called when an unlock attempt begins.
    fn on_unlock_attempt(&self, name: &str) {
        let _ = name;
    }
}

/// Default probe emitting `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProbe;

impl LockProbe for TracingProbe {
    fn on_lock_attempt(&self, name: &str) {
        tracing::debug!(lock.name = name, "attempting lock");
    }

    fn on_unlock_attempt(&self, name: &str) {
        tracing::debug!(lock.name = name, "attempting unlock");
    }
}
