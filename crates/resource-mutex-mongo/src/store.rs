//! MongoDB lock store implementation.

use mongodb::{
    Collection, Database,
    bson::doc,
    error::{ErrorKind, WriteFailure},
};

use resource_mutex_core::error::{LockError, LockResult};
use resource_mutex_core::record::LockRecord;
use resource_mutex_core::store::LockStore;

use crate::document::MongoLockDocument;

/// MongoDB write-error code for a duplicate `_id`.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Store backed by a MongoDB collection of lock documents.
#[derive(Debug, Clone)]
pub struct MongoLockStore {
    collection: Collection<MongoLockDocument>,
}

impl MongoLockStore {
    /// Creates a store over `database`, defaulting the collection name to
    /// `"ResourceLocks"`.
    pub fn new(database: Database, collection_name: Option<String>) -> Self {
        let collection_name = collection_name.as_deref().unwrap_or("ResourceLocks");
        Self {
            collection: database.collection(collection_name),
        }
    }

    /// The underlying collection.
    pub fn collection(&self) -> &Collection<MongoLockDocument> {
        &self.collection
    }
}

impl LockStore for MongoLockStore {
    async fn find(&self, key: &str) -> LockResult<Option<LockRecord>> {
        let document = self
            .collection
            .find_one(doc! { "_id": key })
            .await
            .map_err(|e| LockError::Store(Box::new(e)))?;

        Ok(document.map(MongoLockDocument::into_record))
    }

    async fn create(&self, record: &LockRecord) -> LockResult<bool> {
        let document = MongoLockDocument::from_record(record);

        // The unique _id index makes this the atomic claim: a concurrent
        // insert for the same key loses with a duplicate-key error.
        match self.collection.insert_one(document).await {
            Ok(_) => Ok(true),
            Err(e) if is_duplicate_key(&e) => Ok(false),
            Err(e) => Err(LockError::Store(Box::new(e))),
        }
    }

    async fn replace(&self, record: &LockRecord) -> LockResult<()> {
        let document = MongoLockDocument::from_record(record);

        self.collection
            .replace_one(doc! { "_id": &document.id }, &document)
            .upsert(true)
            .await
            .map_err(|e| LockError::Store(Box::new(e)))?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> LockResult<()> {
        self.collection
            .delete_one(doc! { "_id": key })
            .await
            .map_err(|e| LockError::Store(Box::new(e)))?;

        Ok(())
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        &*error.kind,
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}
