//! Error types for mutex operations.

use thiserror::Error;

/// Errors raised by mutex operations.
#[derive(Error, Debug)]
pub enum LockError {
    /// The requested resource type is not in the permitted set.
    ///
    /// Raised before any store access; always a caller-programming error.
    #[error("invalid lock type: {0}")]
    InvalidLockType(String),

    /// The resource is already claimed and `force` was not set.
    ///
    /// Callers may retry at a higher level; this crate never retries.
    #[error("resource '{name}' is locked by '{held_by}'")]
    ResourceLocked {
        /// Caller-facing handle identity (`type:id`).
        name: String,
        /// Identity recorded by the current holder, or `"unknown client"`.
        held_by: String,
    },

    /// The backing store failed or rejected an operation.
    #[error("store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type for mutex and store operations.
pub type LockResult<T> = Result<T, LockError>;

/// Error returned by `synchronize`.
///
/// Keeps lock-layer failures distinguishable from failures of the protected
/// work, so orchestration layers can decide whether to retry, wait, or
/// abort. The work's own error is passed through unchanged.
#[derive(Error, Debug)]
pub enum SynchronizeError<E>
where
    E: std::error::Error,
{
    /// Acquisition failed before the work ran.
    #[error(transparent)]
    Lock(#[from] LockError),

    /// The protected work itself failed.
    #[error(transparent)]
    Work(E),
}
