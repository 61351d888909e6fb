//! Common test utilities for integration tests
//!
//! Builds application state over an in-memory backend that the test keeps a
//! handle to, so persisted documents can be inspected and reloaded.

#![allow(dead_code)]

use chrono::NaiveDate;
use gymmania_store::config::AppConfig;
use gymmania_store::state::AppState;
use gymmania_store::storage::{KeyValueStore, MemoryStore, SharedStore};
use std::sync::Arc;

/// Test application wrapper
pub struct TestApp {
    pub state: AppState,
    pub store: SharedStore,
}

impl TestApp {
    /// Fresh state over empty storage
    pub async fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new())).await
    }

    /// State over storage pre-seeded with raw documents
    pub async fn with_documents(docs: &[(&str, &str)]) -> Self {
        Self::with_store(Arc::new(MemoryStore::with_entries(docs.iter().copied()))).await
    }

    pub async fn with_store(store: SharedStore) -> Self {
        let state = AppState::with_store(store.clone(), AppConfig::in_memory()).await;
        Self { state, store }
    }

    /// Flush pending writes and load a second state from the same storage
    pub async fn reload(&self) -> AppState {
        self.state.flush().await;
        AppState::with_store(self.store.clone(), AppConfig::in_memory()).await
    }

    /// Raw stored document after flushing pending writes
    pub async fn stored(&self, key: &str) -> Option<serde_json::Value> {
        self.state.flush().await;
        let raw = self.store.get(key).await.expect("memory store read");
        raw.map(|r| serde_json::from_str(&r).expect("stored document is JSON"))
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}
