//! Distributed mutex over a shared document store.
//!
//! Lets independent process instances coordinate exclusive access to a
//! named shared resource (an "environment", a "node") by claiming a lock
//! record in a remote store. The record's existence *is* the lock; the
//! store's conditional write is the only source of mutual exclusion.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use resource_mutex::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a store (example: in-process backend)
//!     let store = MemoryLockStore::new();
//!
//!     // Bind a mutex to a resource
//!     let mutex = ResourceMutexBuilder::new("environment", "staging")
//!         .held_by("deploy-worker-1")
//!         .build(store);
//!
//!     // Run a unit of work with the lock held; the lock is released
//!     // afterwards, and contention surfaces as a typed error.
//!     let result = mutex
//!         .synchronize(|| async { Ok::<_, std::io::Error>("deployed") })
//!         .await?;
//!
//!     println!("{result}");
//!     Ok(())
//! }
//! ```
//!
//! # Backends
//!
//! ## In-Memory Backend
//!
//! Process-local map. No external services; for tests and demos, or for
//! single-process embedding.
//!
//! ```rust,no_run
//! use resource_mutex::MemoryLockStore;
//!
//! let store = MemoryLockStore::new();
//! ```
//!
//! ## MongoDB Backend
//!
//! Lock records as documents keyed by `_id`; the unique index provides the
//! atomic claim.
//!
//! ```rust,no_run
//! use resource_mutex::MongoLockStore;
//!
//! # async fn connect() -> Result<(), Box<dyn std::error::Error>> {
//! let client = mongodb::Client::with_uri_str("mongodb://localhost:27017").await?;
//! let store = MongoLockStore::new(client.database("coordination"), None);
//! # Ok(())
//! # }
//! ```
//!
//! ## Redis Backend
//!
//! Lock records as JSON values; `SET NX` provides the atomic claim.
//!
//! ```rust,no_run
//! use resource_mutex::RedisLockStore;
//!
//! # async fn connect() -> Result<(), Box<dyn std::error::Error>> {
//! let store = RedisLockStore::connect("redis://localhost:6379").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Semantics
//!
//! - **Claim-if-absent**: a plain `lock()` performs one atomic conditional
//!   write; two contenders can never both win.
//! - **Force override**: a mutex built with `.force(true)` replaces any
//!   existing record unconditionally, ignoring the prior holder.
//! - **Permissive release**: `unlock()` never checks ownership; any handle
//!   addressing a resource may release it.
//! - **No leases**: records never expire; a crashed holder's lock stays
//!   until deleted or force-claimed.
//!
//! # Crate Organization
//!
//! This is a meta-crate that re-exports types from:
//! - `resource-mutex-core`: record model, store contract, mutex logic
//! - `resource-mutex-memory`: in-process backend
//! - `resource-mutex-mongo`: MongoDB backend
//! - `resource-mutex-redis`: Redis backend
//!
//! For fine-grained control, depend on individual crates instead.

// Re-export core types and traits
pub use resource_mutex_core::*;

// Re-export backends
#[allow(ambiguous_glob_reexports)]
pub use resource_mutex_memory::*;

#[allow(ambiguous_glob_reexports)]
pub use resource_mutex_mongo::*;

#[allow(ambiguous_glob_reexports)]
pub use resource_mutex_redis::*;
