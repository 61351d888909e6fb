use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::{info, warn};

use super::{KeyValueStore, StorageError};

/// Documents stored as plain Redis strings
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connect with graceful fallback
    ///
    /// Returns None if Redis is unavailable so the caller can pick another
    /// backend.
    pub async fn connect(url: &str) -> Option<Self> {
        info!("Connecting to Redis...");

        match redis::Client::open(url) {
            Ok(client) => match ConnectionManager::new(client).await {
                Ok(conn) => {
                    info!("Redis connection established");
                    Some(Self { conn })
                }
                Err(e) => {
                    warn!("Failed to connect to Redis: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Invalid Redis URL: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.conn.clone();
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
