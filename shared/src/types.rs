//! Derived view types returned by the statistics layer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::logs::LoggedSet;
use crate::models::{DayOfWeek, MacroNutrients, PlannedExercise};

/// Aggregates over the completed sets of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTotals {
    /// Σ weight × reps
    pub volume: f64,
    pub total_reps: u32,
    pub total_sets: u32,
}

/// Change from a previous value to a current one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub diff: f64,
    /// Rounded percentage of the previous value; positive means improvement
    pub pct: i64,
}

/// Best completed set of one exercise, today against the previous session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseComparison {
    pub exercise_id: String,
    pub exercise_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_best: Option<LoggedSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_best: Option<LoggedSet>,
    /// Weight delta between the two best sets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_delta: Option<Delta>,
}

/// Whole-workout comparison against the most recent earlier workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionComparison {
    pub previous_date: NaiveDate,
    pub current: SessionTotals,
    pub previous: SessionTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_delta: Option<Delta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps_delta: Option<Delta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets_delta: Option<Delta>,
    /// Exercises done in the previous workout, in its order
    pub exercises: Vec<ExerciseComparison>,
}

/// Completed sets of one exercise on one earlier date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSession {
    pub date: NaiveDate,
    pub sets: Vec<LoggedSet>,
    pub best_weight: f64,
    pub volume: f64,
}

/// Per-exercise statistics used in the session-over-session view
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseStats {
    pub volume: f64,
    pub reps: u32,
    pub avg_weight: f64,
}

/// Heaviest completed set ever logged for an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestLift {
    pub exercise_id: String,
    pub exercise_name: String,
    pub weight: f64,
    pub reps: u32,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyWeightSample {
    pub date: NaiveDate,
    /// kg
    pub weight: f64,
}

/// Actual intake against target, with capped percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroProgress {
    pub actual: MacroNutrients,
    pub target: MacroNutrients,
    pub calories_pct: u32,
    pub protein_pct: u32,
    pub carbs_pct: u32,
    pub fat_pct: u32,
}

/// A logged exercise joined with its plan targets for the day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseProgress {
    pub exercise_id: String,
    pub exercise_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<PlannedExercise>,
    pub completed_sets: u32,
    pub total_sets: u32,
    pub totals: SessionTotals,
}

/// Logged exercises with plan targets, plus planned exercises not yet logged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedVsLogged {
    pub logged: Vec<ExerciseProgress>,
    pub suggestions: Vec<PlannedExercise>,
}

/// Plan status of a day in the week strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Rest,
    Planned,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekStripEntry {
    pub day: DayOfWeek,
    pub status: DayStatus,
    pub is_today: bool,
}

/// Training summary over a trailing window of days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub range_days: u32,
    pub total_workouts: u32,
    pub total_sets: u32,
    pub total_volume: f64,
    pub streak_days: u32,
    pub body_weights: Vec<BodyWeightSample>,
    pub best_lifts: Vec<BestLift>,
}
