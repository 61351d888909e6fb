//! Load-or-default decoding for the persisted documents

use gymmania_shared::{DietPlan, LogBook, WorkoutPlan};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};
use crate::storage::KeyValueStore;

/// A whole-record document kept under one storage key
pub trait Document: Serialize + DeserializeOwned + Default {
    /// Name used in log messages
    const NAME: &'static str;

    /// Structural check run after parsing. A failing document is discarded.
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Document for WorkoutPlan {
    const NAME: &'static str = "workout plan";

    fn check(&self) -> Result<(), String> {
        if self.has_complete_week() {
            Ok(())
        } else {
            Err(format!("expected 7 distinct days, found {}", self.days.len()))
        }
    }
}

impl Document for DietPlan {
    const NAME: &'static str = "diet plan";

    fn check(&self) -> Result<(), String> {
        if self.has_complete_week() {
            Ok(())
        } else {
            Err(format!("expected 7 distinct days, found {}", self.days.len()))
        }
    }
}

impl Document for LogBook {
    const NAME: &'static str = "daily logs";
}

/// Repository for whole-document reads and encodes
pub struct DocumentRepository;

impl DocumentRepository {
    /// Load the document at `key`.
    ///
    /// A missing key gives the default document. A read failure, a parse
    /// failure or a failed structural check also gives the default, with a
    /// warning.
    pub async fn load<D: Document>(store: &dyn KeyValueStore, key: &str) -> D {
        let raw = match store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!(key, "No stored {}; starting from default", D::NAME);
                return D::default();
            }
            Err(e) => {
                warn!(key, error = %e, "Failed to read {}; using default", D::NAME);
                return D::default();
            }
        };

        match Self::decode::<D>(&raw) {
            Ok(doc) => {
                info!(key, "Loaded {}", D::NAME);
                doc
            }
            Err(e) => {
                warn!(key, error = %e, "Discarding stored {}; using default", D::NAME);
                D::default()
            }
        }
    }

    /// Parse and check a raw document
    pub fn decode<D: Document>(raw: &str) -> StoreResult<D> {
        let doc: D = serde_json::from_str(raw)?;
        doc.check()
            .map_err(|msg| StoreError::Validation(format!("{}: {}", D::NAME, msg)))?;
        Ok(doc)
    }

    pub fn encode<D: Document>(doc: &D) -> StoreResult<String> {
        Ok(serde_json::to_string(doc)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use gymmania_shared::{DailyLog, DietGoal};

    #[tokio::test]
    async fn test_missing_key_loads_default() {
        let store = MemoryStore::new();
        let plan: WorkoutPlan = DocumentRepository::load(&store, "@gymmania_workout_plan").await;
        assert_eq!(plan, WorkoutPlan::default());
    }

    #[tokio::test]
    async fn test_corrupt_document_loads_default() {
        let store = MemoryStore::with_entries([("@gymmania_diet_plan", "{not json")]);
        let plan: DietPlan = DocumentRepository::load(&store, "@gymmania_diet_plan").await;
        assert_eq!(plan, DietPlan::default());
    }

    #[tokio::test]
    async fn test_six_day_plan_loads_default() {
        let mut plan = WorkoutPlan::default();
        plan.name = "Six days".to_string();
        plan.days.pop();
        let raw = DocumentRepository::encode(&plan).unwrap();
        let store = MemoryStore::with_entries([("plan", raw)]);

        let loaded: WorkoutPlan = DocumentRepository::load(&store, "plan").await;
        assert_eq!(loaded.name, "My Workout Plan");
        assert_eq!(loaded.days.len(), 7);
    }

    #[test]
    fn test_decode_round_trip() {
        let mut plan = DietPlan::default();
        plan.set_goal(DietGoal::Bulk);
        let raw = DocumentRepository::encode(&plan).unwrap();
        let decoded: DietPlan = DocumentRepository::decode(&raw).unwrap();
        assert_eq!(decoded, plan);
    }

    #[test]
    fn test_decode_log_book() {
        let raw = r#"{"2024-01-08":{"date":"2024-01-08","bodyWeight":81.2}}"#;
        let book: LogBook = DocumentRepository::decode(raw).unwrap();
        let log: &DailyLog = book.values().next().unwrap();
        assert_eq!(log.body_weight, Some(81.2));
    }
}
