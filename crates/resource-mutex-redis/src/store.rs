//! Redis lock store implementation.

use fred::prelude::*;

use resource_mutex_core::error::{LockError, LockResult};
use resource_mutex_core::record::LockRecord;
use resource_mutex_core::store::LockStore;

/// Key prefix used when none is configured.
const DEFAULT_KEY_PREFIX: &str = "resource-locks:";

/// Store backed by a single Redis server.
///
/// Records are serialized to JSON and written under
/// `"{prefix}{storage_key}"`.
#[derive(Clone)]
pub struct RedisLockStore {
    client: RedisClient,
    key_prefix: String,
}

impl RedisLockStore {
    /// Creates a store over an already-connected client.
    pub fn new(client: RedisClient, key_prefix: Option<String>) -> Self {
        Self {
            client,
            key_prefix: key_prefix.unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string()),
        }
    }

    /// Connects to `url` and builds a store with the default key prefix.
    pub async fn connect(url: &str) -> LockResult<Self> {
        let config = RedisConfig::from_url(url).map_err(|e| {
            LockError::Store(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid Redis URL: {}", e),
            )))
        })?;

        let client = RedisClient::new(config, None, None, None);
        client.connect();
        client.wait_for_connect().await.map_err(|e| {
            LockError::Store(Box::new(std::io::Error::other(format!(
                "failed to connect to Redis: {}",
                e
            ))))
        })?;

        Ok(Self::new(client, None))
    }

    fn redis_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

impl LockStore for RedisLockStore {
    async fn find(&self, key: &str) -> LockResult<Option<LockRecord>> {
        let value: Option<String> = self
            .client
            .get(self.redis_key(key))
            .await
            .map_err(|e| store_error("Redis GET failed", e))?;

        match value {
            Some(json) => {
                let record = serde_json::from_str(&json)
                    .map_err(|e| LockError::Store(Box::new(e)))?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn create(&self, record: &LockRecord) -> LockResult<bool> {
        let json = serde_json::to_string(record).map_err(|e| LockError::Store(Box::new(e)))?;

        // SET NX is the atomic claim: it returns OK only when the key was
        // absent. No expiration is attached.
        let result: Option<String> = self
            .client
            .set(
                self.redis_key(&record.storage_key()),
                json,
                None,
                Some(SetOptions::NX),
                false,
            )
            .await
            .map_err(|e| store_error("Redis SET NX failed", e))?;

        Ok(result.is_some())
    }

    async fn replace(&self, record: &LockRecord) -> LockResult<()> {
        let json = serde_json::to_string(record).map_err(|e| LockError::Store(Box::new(e)))?;

        let _: () = self
            .client
            .set(
                self.redis_key(&record.storage_key()),
                json,
                None,
                None,
                false,
            )
            .await
            .map_err(|e| store_error("Redis SET failed", e))?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> LockResult<()> {
        let _: u64 = self
            .client
            .del(self.redis_key(key))
            .await
            .map_err(|e| store_error("Redis DEL failed", e))?;

        Ok(())
    }
}

fn store_error(context: &str, error: RedisError) -> LockError {
    LockError::Store(Box::new(std::io::Error::other(format!(
        "{}: {}",
        context, error
    ))))
}
