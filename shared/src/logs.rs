//! Daily log models
//!
//! Logs are calendar-dated records of what actually happened, keyed by date.
//! Exercises within a workout log are unique by exercise id and meals within a
//! diet log are unique by meal type; writes replace in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::DomainError;
use crate::models::{DayOfWeek, MacroNutrients, MealType};
use crate::nutrition::{aggregate_macros, Portion};

/// Every daily log ever recorded, ordered by date
pub type LogBook = BTreeMap<NaiveDate, DailyLog>;

// ============================================================================
// Workout Logs
// ============================================================================

/// A performed set; only completed sets count toward statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoggedSet {
    /// 1-based, contiguous within an exercise
    pub set_number: u32,
    /// kg
    pub weight: f64,
    pub reps: u32,
    pub completed: bool,
}

impl LoggedSet {
    /// weight × reps
    pub fn volume(&self) -> f64 {
        self.weight * self.reps as f64
    }
}

/// Partial update applied to a logged set
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoggedSetUpdate {
    pub weight: Option<f64>,
    pub reps: Option<u32>,
    pub completed: Option<bool>,
}

impl LoggedSetUpdate {
    fn apply(&self, set: &mut LoggedSet) {
        if let Some(weight) = self.weight {
            set.weight = weight;
        }
        if let Some(reps) = self.reps {
            set.reps = reps;
        }
        if let Some(completed) = self.completed {
            set.completed = completed;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoggedExercise {
    pub exercise_id: String,
    /// Snapshot of the display name at log time
    pub exercise_name: String,
    pub sets: Vec<LoggedSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LoggedExercise {
    pub fn new(exercise_id: impl Into<String>, exercise_name: impl Into<String>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            exercise_name: exercise_name.into(),
            sets: Vec::new(),
            notes: None,
        }
    }

    /// Append a set numbered after the existing ones
    pub fn add_set(&mut self, weight: f64, reps: u32, completed: bool) {
        let set_number = self.sets.len() as u32 + 1;
        self.sets.push(LoggedSet {
            set_number,
            weight,
            reps,
            completed,
        });
    }

    /// Patch the set at `index`. Returns false when out of range.
    pub fn update_set(&mut self, index: usize, update: &LoggedSetUpdate) -> bool {
        match self.sets.get_mut(index) {
            Some(set) => {
                update.apply(set);
                true
            }
            None => false,
        }
    }

    /// Drop the set at `index` and renumber the rest 1..N-1.
    /// Returns false when out of range.
    pub fn remove_set(&mut self, index: usize) -> bool {
        if index >= self.sets.len() {
            return false;
        }
        self.sets.remove(index);
        for (i, set) in self.sets.iter_mut().enumerate() {
            set.set_number = i as u32 + 1;
        }
        true
    }

    pub fn completed_sets(&self) -> impl Iterator<Item = &LoggedSet> + '_ {
        self.sets.iter().filter(|s| s.completed)
    }

    pub fn has_completed_set(&self) -> bool {
        self.sets.iter().any(|s| s.completed)
    }
}

/// Mood rating 1 (worst) to 5 (best)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Mood(u8);

impl Mood {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Mood {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=5).contains(&value) {
            Ok(Mood(value))
        } else {
            Err(DomainError::InvalidMood(value))
        }
    }
}

impl From<Mood> for u8 {
    fn from(mood: Mood) -> u8 {
        mood.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    pub id: String,
    pub date: NaiveDate,
    pub day: DayOfWeek,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    pub exercises: Vec<LoggedExercise>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutLog {
    /// Empty workout log for a date, id `wl_<date>`
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: format!("wl_{}", date),
            date,
            day: DayOfWeek::of(date),
            plan_name: None,
            exercises: Vec::new(),
            duration_minutes: None,
            mood: None,
            notes: None,
        }
    }

    pub fn exercise(&self, exercise_id: &str) -> Option<&LoggedExercise> {
        self.exercises.iter().find(|e| e.exercise_id == exercise_id)
    }

    pub fn exercise_mut(&mut self, exercise_id: &str) -> Option<&mut LoggedExercise> {
        self.exercises.iter_mut().find(|e| e.exercise_id == exercise_id)
    }

    /// Replace the entry with the same exercise id in place, or append
    pub fn upsert_exercise(&mut self, exercise: LoggedExercise) {
        match self.exercise_mut(&exercise.exercise_id) {
            Some(existing) => *existing = exercise,
            None => self.exercises.push(exercise),
        }
    }

    pub fn remove_exercise(&mut self, exercise_id: &str) {
        self.exercises.retain(|e| e.exercise_id != exercise_id);
    }

    pub fn has_exercises(&self) -> bool {
        !self.exercises.is_empty()
    }

    pub fn completed_sets(&self) -> impl Iterator<Item = &LoggedSet> + '_ {
        self.exercises.iter().flat_map(|e| e.completed_sets())
    }
}

// ============================================================================
// Diet Logs
// ============================================================================

/// Food actually eaten
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealLogItem {
    pub food_name: String,
    pub quantity: f64,
    pub macros: MacroNutrients,
}

impl Portion for MealLogItem {
    fn macros(&self) -> &MacroNutrients {
        &self.macros
    }

    fn quantity(&self) -> f64 {
        self.quantity
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealLog {
    pub meal_type: MealType,
    pub items: Vec<MealLogItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DietLog {
    pub id: String,
    pub date: NaiveDate,
    pub meals: Vec<MealLog>,
    /// Cached aggregate of `meals`, refreshed on every write
    pub total_macros: MacroNutrients,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_intake_liters: Option<f64>,
}

impl DietLog {
    /// Empty diet log for a date, id `dl_<date>`
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: format!("dl_{}", date),
            date,
            meals: Vec::new(),
            total_macros: MacroNutrients::ZERO,
            water_intake_liters: None,
        }
    }

    /// Replace the meal of the same type in place, or append
    pub fn upsert_meal(&mut self, meal: MealLog) {
        match self.meals.iter_mut().find(|m| m.meal_type == meal.meal_type) {
            Some(existing) => *existing = meal,
            None => self.meals.push(meal),
        }
        self.recompute_totals();
    }

    /// Append an eaten item to the meal of `meal_type`, creating the meal if needed
    pub fn add_food(&mut self, meal_type: MealType, item: MealLogItem) {
        match self.meals.iter_mut().find(|m| m.meal_type == meal_type) {
            Some(meal) => meal.items.push(item),
            None => self.meals.push(MealLog {
                meal_type,
                items: vec![item],
            }),
        }
        self.recompute_totals();
    }

    pub fn recompute_totals(&mut self) {
        self.total_macros = aggregate_macros(self.meals.iter().flat_map(|m| m.items.iter()));
    }
}

// ============================================================================
// Daily Log
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_log: Option<WorkoutLog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet_log: Option<DietLog>,
    /// kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DailyLog {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            workout_log: None,
            diet_log: None,
            body_weight: None,
            notes: None,
        }
    }

    /// Workout log for the day, created empty on first access
    pub fn workout_log_mut(&mut self) -> &mut WorkoutLog {
        let date = self.date;
        self.workout_log.get_or_insert_with(|| WorkoutLog::new(date))
    }

    /// Diet log for the day, created empty on first access
    pub fn diet_log_mut(&mut self) -> &mut DietLog {
        let date = self.date;
        self.diet_log.get_or_insert_with(|| DietLog::new(date))
    }

    /// True when a workout with at least one exercise was logged
    pub fn has_workout(&self) -> bool {
        self.workout_log.as_ref().is_some_and(WorkoutLog::has_exercises)
    }
}
