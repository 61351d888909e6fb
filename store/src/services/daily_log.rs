//! Daily log store
//!
//! Owns the full date-keyed log book. Day entries, workout logs and diet logs
//! are created lazily by the first write that needs them. Numeric inputs are
//! validated up front and a rejected write leaves the book untouched.

use chrono::{NaiveDate, Utc};
use gymmania_shared::stats;
use gymmania_shared::validation::{
    validate_body_weight, validate_duration_minutes, validate_macros, validate_notes,
    validate_quantity, validate_reps, validate_set_weight, validate_water_liters,
};
use gymmania_shared::{
    BodyWeightSample, DailyLog, DietLog, LogBook, LoggedExercise, LoggedSetUpdate, MealLog,
    MealLogItem, MealType, Mood, WorkoutLog,
};
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::persist::Persister;
use crate::repositories::DocumentRepository;
use crate::storage::KeyValueStore;

pub struct LogStore {
    logs: LogBook,
    key: String,
    persister: Persister,
}

fn validate_exercise(exercise: &LoggedExercise) -> StoreResult<()> {
    for set in &exercise.sets {
        validate_set_weight(set.weight)?;
        validate_reps(set.reps)?;
    }
    Ok(())
}

fn validate_meal_item(item: &MealLogItem) -> StoreResult<()> {
    validate_quantity(item.quantity)?;
    validate_macros(&item.macros)?;
    Ok(())
}

impl LogStore {
    pub async fn load(store: &dyn KeyValueStore, key: &str, persister: Persister) -> Self {
        let logs: LogBook = DocumentRepository::load(store, key).await;
        debug!(days = logs.len(), "Log book loaded");
        Self {
            logs,
            key: key.to_string(),
            persister,
        }
    }

    pub fn log(&self, date: NaiveDate) -> Option<&DailyLog> {
        self.logs.get(&date)
    }

    pub fn logs(&self) -> &LogBook {
        &self.logs
    }

    /// Log for the current UTC date
    pub fn today(&self) -> Option<&DailyLog> {
        self.log(Utc::now().date_naive())
    }

    // ========================================================================
    // Workout
    // ========================================================================

    /// Replace the date's workout log wholesale
    pub fn save_workout_log(&mut self, log: WorkoutLog) -> StoreResult<()> {
        log.exercises.iter().try_for_each(validate_exercise)?;
        let date = log.date;
        self.mutate_day(date, |d| d.workout_log = Some(log));
        Ok(())
    }

    /// Insert or replace the exercise by id, keeping its position
    pub fn upsert_exercise(&mut self, date: NaiveDate, exercise: LoggedExercise) -> StoreResult<()> {
        validate_exercise(&exercise)?;
        self.mutate_day(date, |d| d.workout_log_mut().upsert_exercise(exercise));
        Ok(())
    }

    /// Append a set numbered after the existing ones, creating the exercise
    /// entry on first use
    pub fn add_set(
        &mut self,
        date: NaiveDate,
        exercise_id: &str,
        exercise_name: &str,
        weight: f64,
        reps: u32,
        completed: bool,
    ) -> StoreResult<()> {
        validate_set_weight(weight)?;
        validate_reps(reps)?;
        self.mutate_day(date, |d| {
            let workout = d.workout_log_mut();
            if workout.exercise(exercise_id).is_none() {
                workout
                    .exercises
                    .push(LoggedExercise::new(exercise_id, exercise_name));
            }
            if let Some(exercise) = workout.exercise_mut(exercise_id) {
                exercise.add_set(weight, reps, completed);
            }
        });
        Ok(())
    }

    /// Patch the set at `index`; nothing happens if any part of the path is
    /// missing
    pub fn update_set(
        &mut self,
        date: NaiveDate,
        exercise_id: &str,
        index: usize,
        update: LoggedSetUpdate,
    ) -> StoreResult<()> {
        if let Some(weight) = update.weight {
            validate_set_weight(weight)?;
        }
        if let Some(reps) = update.reps {
            validate_reps(reps)?;
        }
        self.mutate_exercise(date, exercise_id, |e| e.update_set(index, &update));
        Ok(())
    }

    /// Drop the set at `index` and renumber the remaining sets
    pub fn remove_set(&mut self, date: NaiveDate, exercise_id: &str, index: usize) {
        self.mutate_exercise(date, exercise_id, |e| e.remove_set(index));
    }

    pub fn remove_exercise(&mut self, date: NaiveDate, exercise_id: &str) {
        self.mutate_workout(date, |w| w.remove_exercise(exercise_id));
    }

    pub fn set_workout_duration(&mut self, date: NaiveDate, minutes: u32) -> StoreResult<()> {
        validate_duration_minutes(minutes)?;
        self.mutate_workout(date, |w| w.duration_minutes = Some(minutes));
        Ok(())
    }

    pub fn set_workout_mood(&mut self, date: NaiveDate, mood: Mood) {
        self.mutate_workout(date, |w| w.mood = Some(mood));
    }

    pub fn set_workout_notes(&mut self, date: NaiveDate, notes: impl Into<String>) -> StoreResult<()> {
        let notes = notes.into();
        validate_notes(&notes)?;
        self.mutate_workout(date, |w| w.notes = Some(notes));
        Ok(())
    }

    // ========================================================================
    // Diet and body
    // ========================================================================

    /// Replace the date's diet log wholesale; totals are recomputed
    pub fn save_diet_log(&mut self, mut log: DietLog) -> StoreResult<()> {
        log.meals
            .iter()
            .flat_map(|m| m.items.iter())
            .try_for_each(validate_meal_item)?;
        log.recompute_totals();
        let date = log.date;
        self.mutate_day(date, |d| d.diet_log = Some(log));
        Ok(())
    }

    /// Insert or replace the meal by type
    pub fn upsert_meal(&mut self, date: NaiveDate, meal: MealLog) -> StoreResult<()> {
        meal.items.iter().try_for_each(validate_meal_item)?;
        self.mutate_day(date, |d| d.diet_log_mut().upsert_meal(meal));
        Ok(())
    }

    pub fn add_food_to_meal_log(
        &mut self,
        date: NaiveDate,
        meal_type: MealType,
        item: MealLogItem,
    ) -> StoreResult<()> {
        validate_meal_item(&item)?;
        self.mutate_day(date, |d| d.diet_log_mut().add_food(meal_type, item));
        Ok(())
    }

    pub fn set_water_intake(&mut self, date: NaiveDate, liters: f64) -> StoreResult<()> {
        validate_water_liters(liters)?;
        self.mutate_day(date, |d| d.diet_log_mut().water_intake_liters = Some(liters));
        Ok(())
    }

    pub fn set_body_weight(&mut self, date: NaiveDate, weight_kg: f64) -> StoreResult<()> {
        validate_body_weight(weight_kg)?;
        self.mutate_day(date, |d| d.body_weight = Some(weight_kg));
        Ok(())
    }

    pub fn set_day_notes(&mut self, date: NaiveDate, notes: impl Into<String>) -> StoreResult<()> {
        let notes = notes.into();
        validate_notes(&notes)?;
        self.mutate_day(date, |d| d.notes = Some(notes));
        Ok(())
    }

    // ========================================================================
    // Range queries
    // ========================================================================

    /// Body weights over the last `days` days ending at `today`, oldest first
    pub fn recent_body_weights(&self, days: u32, today: NaiveDate) -> Vec<BodyWeightSample> {
        stats::recent_body_weights(&self.logs, today, days)
    }

    /// Workout logs over the last `days` days ending at `today`, oldest first
    pub fn recent_workout_logs(&self, days: u32, today: NaiveDate) -> Vec<&WorkoutLog> {
        stats::recent_workout_logs(&self.logs, today, days)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn mutate_day(&mut self, date: NaiveDate, f: impl FnOnce(&mut DailyLog)) {
        f(self
            .logs
            .entry(date)
            .or_insert_with(|| DailyLog::new(date)));
        debug!(%date, "Daily log updated");
        self.persist();
    }

    /// Apply `f` to the date's workout log. Without one, nothing is created
    /// and nothing is persisted.
    fn mutate_workout(&mut self, date: NaiveDate, f: impl FnOnce(&mut WorkoutLog)) {
        match self.logs.get_mut(&date).and_then(|d| d.workout_log.as_mut()) {
            Some(workout) => {
                f(workout);
                debug!(%date, "Workout log updated");
                self.persist();
            }
            None => debug!(%date, "No workout log for date; ignoring"),
        }
    }

    /// Apply `f` to one logged exercise; `f` reports whether it changed
    /// anything
    fn mutate_exercise(
        &mut self,
        date: NaiveDate,
        exercise_id: &str,
        f: impl FnOnce(&mut LoggedExercise) -> bool,
    ) {
        let changed = self
            .logs
            .get_mut(&date)
            .and_then(|d| d.workout_log.as_mut())
            .and_then(|w| w.exercise_mut(exercise_id))
            .map(f)
            .unwrap_or(false);
        if changed {
            debug!(%date, exercise_id, "Logged exercise updated");
            self.persist();
        } else {
            debug!(%date, exercise_id, "No matching logged set; ignoring");
        }
    }

    fn persist(&self) {
        match DocumentRepository::encode(&self.logs) {
            Ok(json) => self.persister.schedule(&self.key, json),
            Err(e) => warn!(error = %e, "Failed to encode daily logs"),
        }
    }
}
