//! BSON document shape for persisted lock records.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use resource_mutex_core::record::LockRecord;

/// Wire shape of a lock record.
///
/// `_id` carries the storage key, making the collection's primary-key
/// index the arbiter for claim-if-absent. `acquiredAt` is stamped at write
/// time for diagnostics; it is never consulted for expiry.
#[derive(Debug, Serialize, Deserialize)]
pub struct MongoLockDocument {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "resourceType")]
    pub resource_type: String,

    #[serde(rename = "resourceId")]
    pub resource_id: String,

    #[serde(rename = "heldBy")]
    pub held_by: String,

    #[serde(rename = "acquiredAt")]
    pub acquired_at: DateTime,
}

impl MongoLockDocument {
    /// Builds the document for a record, stamping the claim time.
    pub fn from_record(record: &LockRecord) -> Self {
        Self {
            id: record.storage_key(),
            resource_type: record.resource_type.clone(),
            resource_id: record.resource_id.clone(),
            held_by: record.held_by.clone(),
            acquired_at: DateTime::now(),
        }
    }

    /// Converts back to the core record shape.
    pub fn into_record(self) -> LockRecord {
        LockRecord::new(self.resource_type, self.resource_id, self.held_by)
    }
}
