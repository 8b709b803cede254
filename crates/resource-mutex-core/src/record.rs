//! Lock record data model.

use serde::{Deserialize, Serialize};

/// Resource kinds a mutex may claim by default.
///
/// A mutex rejects lock attempts for any type outside its permitted set;
/// the set can be overridden per mutex via the builder.
pub const PERMITTED_LOCK_TYPES: &[&str] = &["environment", "node"];

/// The persisted unit of state representing "resource X is claimed".
///
/// A record's existence at its storage key *is* the lock: there is no
/// separate flag. Records live until explicitly deleted or replaced by a
/// forced claim; no expiry is applied by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockRecord {
    /// Resource kind, e.g. `"environment"`.
    pub resource_type: String,
    /// Specific instance of that kind, e.g. an environment name.
    pub resource_id: String,
    /// Identity of the claiming client. Diagnostics only; never consulted
    /// for authorization.
    pub held_by: String,
}

impl LockRecord {
    /// Creates a record for a resource claimed by `held_by`.
    pub fn new(
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        held_by: impl Into<String>,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            held_by: held_by.into(),
        }
    }

    /// Caller-facing handle identity, used for logging and diagnostics.
    pub fn name(&self) -> String {
        format!("{}:{}", self.resource_type, self.resource_id)
    }

    /// The store's primary key for this record.
    pub fn storage_key(&self) -> String {
        format!("{}-{}", self.resource_type, self.resource_id)
    }
}
