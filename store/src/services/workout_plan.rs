//! Weekly workout plan store
//!
//! Holds the single workout plan in memory. Every mutation that changes the
//! plan schedules a write of the whole document.

use gymmania_shared::{DayOfWeek, PlannedExercise, PlannedExerciseUpdate, WorkoutDay, WorkoutPlan};
use tracing::{debug, warn};

use crate::persist::Persister;
use crate::repositories::DocumentRepository;
use crate::storage::KeyValueStore;

pub struct WorkoutPlanStore {
    plan: WorkoutPlan,
    key: String,
    persister: Persister,
}

impl WorkoutPlanStore {
    /// Load the plan at `key`, falling back to the default plan
    pub async fn load(store: &dyn KeyValueStore, key: &str, persister: Persister) -> Self {
        let plan = DocumentRepository::load(store, key).await;
        Self {
            plan,
            key: key.to_string(),
            persister,
        }
    }

    pub fn plan(&self) -> &WorkoutPlan {
        &self.plan
    }

    pub fn day(&self, day: DayOfWeek) -> Option<&WorkoutDay> {
        self.plan.day(day)
    }

    pub fn update_day_name(&mut self, day: DayOfWeek, name: impl Into<String>) {
        let name = name.into();
        self.mutate_day(day, |d| d.name = name);
    }

    /// Flip the rest flag; the day's exercises are cleared either way
    pub fn toggle_rest_day(&mut self, day: DayOfWeek) {
        self.mutate_day(day, WorkoutDay::toggle_rest_day);
    }

    pub fn add_exercise(&mut self, day: DayOfWeek, exercise: PlannedExercise) {
        self.mutate_day(day, |d| d.exercises.push(exercise));
    }

    pub fn update_exercise(
        &mut self,
        day: DayOfWeek,
        exercise_id: &str,
        update: &PlannedExerciseUpdate,
    ) {
        self.mutate_day(day, |d| {
            if !d.update_exercise(exercise_id, update) {
                debug!(%day, exercise_id, "No planned exercise to update");
            }
        });
    }

    pub fn remove_exercise(&mut self, day: DayOfWeek, exercise_id: &str) {
        self.mutate_day(day, |d| d.remove_exercise(exercise_id));
    }

    /// Replace the day's exercise list wholesale
    pub fn reorder_exercises(&mut self, day: DayOfWeek, exercises: Vec<PlannedExercise>) {
        self.mutate_day(day, |d| d.exercises = exercises);
    }

    fn mutate_day(&mut self, day: DayOfWeek, f: impl FnOnce(&mut WorkoutDay)) {
        match self.plan.day_mut(day) {
            Some(workout_day) => {
                f(workout_day);
                debug!(%day, "Workout plan updated");
                self.persist();
            }
            None => debug!(%day, "Workout plan has no such day; ignoring"),
        }
    }

    fn persist(&self) {
        match DocumentRepository::encode(&self.plan) {
            Ok(json) => self.persister.schedule(&self.key, json),
            Err(e) => warn!(error = %e, "Failed to encode workout plan"),
        }
    }
}
