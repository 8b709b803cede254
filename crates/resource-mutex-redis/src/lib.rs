//! Redis store backend.
//!
//! Persists lock records as JSON strings under prefixed keys. `SET NX`
//! supplies the atomic claim-if-absent write the mutex relies on. No
//! expiry is set on keys; records live until deleted or force-replaced.

pub mod store;

pub use store::RedisLockStore;
