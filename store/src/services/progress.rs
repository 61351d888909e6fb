//! Progress and dashboard views
//!
//! Read-only compositions of the plan stores, the log store and the
//! statistics layer. Each view takes `today` explicitly so callers and tests
//! control the calendar.

use chrono::NaiveDate;
use gymmania_shared::stats;
use gymmania_shared::{
    macro_progress, DayOfWeek, Delta, ExerciseSession, ExerciseStats, LoggedSet, MacroNutrients,
    MacroProgress, PlannedVsLogged, ProgressSummary, SessionComparison, WeekStripEntry,
};
use serde::Serialize;

use crate::config::StatsConfig;
use crate::services::{DietPlanStore, LogStore, WorkoutPlanStore};

/// Everything the workout tab shows for one date
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDashboard {
    pub date: NaiveDate,
    pub day: DayOfWeek,
    pub day_name: String,
    pub is_rest_day: bool,
    pub week: Vec<WeekStripEntry>,
    pub exercises: PlannedVsLogged,
    pub streak_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<SessionComparison>,
}

/// One exercise on one date against its previous session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseInsight {
    pub exercise_id: String,
    pub current: ExerciseStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_best: Option<LoggedSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<ExerciseStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_best: Option<LoggedSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_delta: Option<Delta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps_delta: Option<Delta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_weight_delta: Option<Delta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_weight_delta: Option<Delta>,
    pub history: Vec<ExerciseSession>,
}

/// Progress service for dashboard composition
pub struct ProgressService;

impl ProgressService {
    /// Plan-vs-log view for `date`, with the week strip, streak and a
    /// comparison against the previous workout
    pub fn workout_dashboard(
        plans: &WorkoutPlanStore,
        logs: &LogStore,
        date: NaiveDate,
        streak_window_days: u32,
    ) -> WorkoutDashboard {
        let day = DayOfWeek::of(date);
        let planned = plans.day(day);
        let workout = logs.log(date).and_then(|d| d.workout_log.as_ref());

        WorkoutDashboard {
            date,
            day,
            day_name: planned.map(|d| d.name.clone()).unwrap_or_default(),
            is_rest_day: planned.is_some_and(|d| d.is_rest_day),
            week: stats::week_strip(plans.plan(), day),
            exercises: stats::plan_vs_log(planned, workout),
            streak_days: stats::streak(logs.logs(), date, streak_window_days),
            comparison: Self::session_comparison(logs, date),
        }
    }

    /// The date's workout against the most recent earlier workout
    pub fn session_comparison(logs: &LogStore, date: NaiveDate) -> Option<SessionComparison> {
        let previous = stats::previous_workout(logs.logs(), date)?;
        let current = logs.log(date).and_then(|d| d.workout_log.as_ref());
        Some(stats::compare_sessions(current, previous))
    }

    /// One exercise on `date` against its most recent earlier session with a
    /// completed set
    pub fn exercise_insight(logs: &LogStore, exercise_id: &str, date: NaiveDate) -> ExerciseInsight {
        let book = logs.logs();
        let current_exercise = book
            .get(&date)
            .and_then(|d| d.workout_log.as_ref())
            .and_then(|w| w.exercise(exercise_id));
        let current_sets = current_exercise.map(|e| e.sets.as_slice()).unwrap_or_default();
        let current = stats::exercise_stats(current_sets);
        let current_best = stats::best_set(current_sets).copied();

        let previous_session = stats::previous_session(book, exercise_id, date);
        let previous = previous_session.map(|(_, e)| stats::exercise_stats(&e.sets));
        let previous_best = previous_session.and_then(|(_, e)| stats::best_set(&e.sets).copied());

        ExerciseInsight {
            exercise_id: exercise_id.to_string(),
            current,
            current_best,
            previous_date: previous_session.map(|(d, _)| d),
            previous,
            previous_best,
            volume_delta: previous.and_then(|p| stats::delta(current.volume, p.volume)),
            reps_delta: previous.and_then(|p| stats::delta(current.reps as f64, p.reps as f64)),
            avg_weight_delta: previous.and_then(|p| stats::delta(current.avg_weight, p.avg_weight)),
            best_weight_delta: match (current_best, previous_best) {
                (Some(now), Some(before)) => stats::delta(now.weight, before.weight),
                _ => None,
            },
            history: stats::exercise_history(book, exercise_id, date),
        }
    }

    /// Eaten intake on `date` against the plan targets for its weekday
    pub fn nutrition_progress(
        diet: &DietPlanStore,
        logs: &LogStore,
        date: NaiveDate,
    ) -> Option<MacroProgress> {
        let targets = diet.day(DayOfWeek::of(date))?.target_macros;
        let actual = logs
            .log(date)
            .and_then(|d| d.diet_log.as_ref())
            .map(|d| d.total_macros)
            .unwrap_or(MacroNutrients::ZERO);
        Some(macro_progress(actual, targets))
    }

    /// Totals over the trailing `range_days`, plus streak and best lifts
    pub fn summary(
        logs: &LogStore,
        today: NaiveDate,
        range_days: u32,
        config: &StatsConfig,
    ) -> ProgressSummary {
        stats::progress_summary(
            logs.logs(),
            today,
            range_days,
            config.streak_window_days,
            config.best_lifts_limit,
        )
    }
}
