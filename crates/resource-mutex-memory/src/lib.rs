//! Process-local store backend.
//!
//! Arbitrates locks through a shared in-process map instead of a remote
//! store. Useful in tests and demos, or for single-process embedding. It
//! offers the same claim-if-absent atomicity as the remote backends,
//! scoped to one process.

pub mod store;

pub use store::MemoryLockStore;
