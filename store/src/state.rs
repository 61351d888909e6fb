//! Application state management
//!
//! Opens the configured storage backend, starts the persist queue and loads
//! the three stores.

use chrono::{NaiveDate, Utc};
use gymmania_shared::validation::parse_date_key;
use gymmania_shared::ProgressSummary;
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::error::StoreResult;
use crate::persist::Persister;
use crate::services::{DietPlanStore, LogStore, ProgressService, WorkoutPlanStore};
use crate::storage::{self, SharedStore};

/// Loaded application state
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub workout_plan: WorkoutPlanStore,
    pub diet_plan: DietPlanStore,
    pub logs: LogStore,
    persister: Persister,
}

impl AppState {
    /// Connect the configured backend and load every document
    pub async fn load(config: AppConfig) -> StoreResult<Self> {
        let store = storage::connect(&config.storage).await?;
        Ok(Self::with_store(store, config).await)
    }

    /// Load every document from an already opened backend
    pub async fn with_store(store: SharedStore, config: AppConfig) -> Self {
        let keys = config.storage.keys();
        let persister = Persister::spawn(store.clone());

        let workout_plan =
            WorkoutPlanStore::load(store.as_ref(), &keys.workout_plan, persister.clone()).await;
        let diet_plan = DietPlanStore::load(store.as_ref(), &keys.diet_plan, persister.clone()).await;
        let logs = LogStore::load(store.as_ref(), &keys.logs, persister.clone()).await;

        info!(
            backend = store.backend(),
            logged_days = logs.logs().len(),
            "Application state loaded"
        );

        Self {
            config: Arc::new(config),
            workout_plan,
            diet_plan,
            logs,
            persister,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Wait for every scheduled write to reach storage
    pub async fn flush(&self) {
        self.persister.flush().await;
    }

    /// Summary over the configured default range ending at `today`
    pub fn progress_summary(&self, today: NaiveDate) -> ProgressSummary {
        ProgressService::summary(
            &self.logs,
            today,
            self.config.stats.default_range_days,
            &self.config.stats,
        )
    }

    /// Summary for the current UTC date
    pub fn progress_summary_today(&self) -> ProgressSummary {
        self.progress_summary(Utc::now().date_naive())
    }

    /// Summary ending at a `YYYY-MM-DD` date key
    pub fn progress_summary_for(&self, date_key: &str) -> StoreResult<ProgressSummary> {
        let today = parse_date_key(date_key)?;
        Ok(self.progress_summary(today))
    }
}
