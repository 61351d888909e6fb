//! Configuration management for the GymMania store
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: GM__)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use validator::Validate;

use crate::error::{StoreError, StoreResult};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    #[validate(nested)]
    pub storage: StorageConfig,
    #[serde(default)]
    #[validate(nested)]
    pub stats: StatsConfig,
}

/// Which key-value backend holds the documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
    Redis,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory for the file backend
    pub data_dir: PathBuf,
    pub redis_url: String,
    /// Prefix for the three document keys
    #[validate(length(min = 1))]
    pub key_prefix: String,
}

/// Keys of the three persisted documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub workout_plan: String,
    pub diet_plan: String,
    pub logs: String,
}

impl StorageConfig {
    pub fn keys(&self) -> StorageKeys {
        StorageKeys {
            workout_plan: format!("{}_workout_plan", self.key_prefix),
            diet_plan: format!("{}_diet_plan", self.key_prefix),
            logs: format!("{}_logs", self.key_prefix),
        }
    }
}

/// Windows and limits for derived statistics
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StatsConfig {
    #[validate(range(min = 1))]
    pub streak_window_days: u32,
    #[validate(range(min = 1))]
    pub best_lifts_limit: usize,
    #[validate(range(min = 1))]
    pub default_range_days: u32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            streak_window_days: gymmania_shared::stats::DEFAULT_STREAK_WINDOW_DAYS,
            best_lifts_limit: gymmania_shared::stats::DEFAULT_BEST_LIFTS_LIMIT,
            default_range_days: 7,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                backend: StorageBackend::File,
                data_dir: PathBuf::from("./data"),
                redis_url: "redis://localhost:6379".to_string(),
                key_prefix: "@gymmania".to_string(),
            },
            stats: StatsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with GM__ prefix
    pub fn load() -> StoreResult<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., GM__STORAGE__BACKEND=redis sets storage.backend
            .add_source(config::Environment::with_prefix("GM").separator("__"))
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config
            .validate()
            .map_err(|e| StoreError::Config(e.to_string()))?;
        Ok(config)
    }

    /// In-memory configuration for tests and throwaway sessions
    pub fn in_memory() -> Self {
        let mut config = Self::default();
        config.storage.backend = StorageBackend::Memory;
        config
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
