//! Convenience prelude for resource mutex types.

pub use crate::error::{LockError, LockResult, SynchronizeError};
pub use crate::mutex::{ResourceMutex, ResourceMutexBuilder};
pub use crate::options::SynchronizeOptions;
pub use crate::probe::{LockProbe, TracingProbe};
pub use crate::record::{LockRecord, PERMITTED_LOCK_TYPES};
pub use crate::store::LockStore;
