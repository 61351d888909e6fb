//! Key-value storage backends
//!
//! Documents are opaque JSON strings stored under string keys. The memory
//! backend serves tests, the file backend keeps one file per key, and the
//! Redis backend goes through a connection manager.

mod file;
mod memory;
mod redis_store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use redis_store::RedisStore;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{StorageBackend, StorageConfig};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Async string-to-string store holding whole documents
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value at `key`; `None` when nothing was stored
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value at `key`
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Backend name for logs
    fn backend(&self) -> &'static str;
}

/// Shared handle to a storage backend
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Open the configured backend.
///
/// An unreachable Redis server is not fatal: the store falls back to memory
/// and logs a warning.
pub async fn connect(config: &StorageConfig) -> Result<SharedStore, StorageError> {
    let store: SharedStore = match config.backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File => Arc::new(FileStore::open(&config.data_dir).await?),
        StorageBackend::Redis => match RedisStore::connect(&config.redis_url).await {
            Some(store) => Arc::new(store),
            None => {
                warn!("Redis unavailable. Documents will only be kept in memory.");
                Arc::new(MemoryStore::new())
            }
        },
    };

    info!(backend = store.backend(), "Storage backend ready");
    Ok(store)
}
