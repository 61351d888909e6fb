//! Training statistics derived from the daily logs
//!
//! Every aggregate here counts completed sets only. Provisional sets (logged
//! but not yet marked done) are ignored by volume, reps, set counts, best-set
//! selection and best lifts alike.

use chrono::{Duration, NaiveDate};
use std::collections::{btree_map, HashMap};

use crate::logs::{DailyLog, LogBook, LoggedExercise, LoggedSet, WorkoutLog};
use crate::models::{DayOfWeek, WorkoutDay, WorkoutPlan};
use crate::types::{
    BestLift, BodyWeightSample, DayStatus, Delta, ExerciseComparison, ExerciseProgress,
    ExerciseSession, ExerciseStats, PlannedVsLogged, ProgressSummary, SessionComparison,
    SessionTotals, WeekStripEntry,
};

/// Days walked back when counting a streak
pub const DEFAULT_STREAK_WINDOW_DAYS: u32 = 30;

/// Number of entries in the best-lifts board
pub const DEFAULT_BEST_LIFTS_LIMIT: usize = 8;

// ============================================================================
// Session Aggregates
// ============================================================================

/// Volume, reps and set count over the completed sets
pub fn session_totals<'a, I>(sets: I) -> SessionTotals
where
    I: IntoIterator<Item = &'a LoggedSet>,
{
    sets.into_iter()
        .filter(|s| s.completed)
        .fold(SessionTotals::default(), |mut acc, s| {
            acc.volume += s.volume();
            acc.total_reps = acc.total_reps.saturating_add(s.reps);
            acc.total_sets = acc.total_sets.saturating_add(1);
            acc
        })
}

/// Totals across every exercise of a workout
pub fn workout_totals(log: &WorkoutLog) -> SessionTotals {
    session_totals(log.exercises.iter().flat_map(|e| e.sets.iter()))
}

/// Volume, reps and mean weight over the completed sets of one exercise
pub fn exercise_stats<'a, I>(sets: I) -> ExerciseStats
where
    I: IntoIterator<Item = &'a LoggedSet>,
{
    let completed: Vec<&LoggedSet> = sets.into_iter().filter(|s| s.completed).collect();
    let totals = session_totals(completed.iter().copied());
    let avg_weight = if completed.is_empty() {
        0.0
    } else {
        completed.iter().map(|s| s.weight).sum::<f64>() / completed.len() as f64
    };

    ExerciseStats {
        volume: totals.volume,
        reps: totals.total_reps,
        avg_weight,
    }
}

/// Heaviest completed set; the first of equally heavy sets wins
pub fn best_set<'a, I>(sets: I) -> Option<&'a LoggedSet>
where
    I: IntoIterator<Item = &'a LoggedSet>,
{
    sets.into_iter()
        .filter(|s| s.completed)
        .fold(None, |best: Option<&LoggedSet>, s| match best {
            Some(b) if s.weight > b.weight => Some(s),
            Some(b) => Some(b),
            None => Some(s),
        })
}

/// Change from `previous` to `current`.
///
/// Returns `None` when `previous` is zero. The percentage is rounded with
/// halves going up, so -12.5 becomes -12.
pub fn delta(current: f64, previous: f64) -> Option<Delta> {
    if previous == 0.0 {
        return None;
    }
    let diff = current - previous;
    let pct = (diff / previous * 100.0 + 0.5).floor() as i64;
    Some(Delta { diff, pct })
}

// ============================================================================
// History Lookups
// ============================================================================

/// Most recent date strictly before `date` with at least one completed set of
/// the exercise. Rest days and days without the exercise are skipped.
pub fn previous_session<'a>(
    logs: &'a LogBook,
    exercise_id: &str,
    date: NaiveDate,
) -> Option<(NaiveDate, &'a LoggedExercise)> {
    logs.range(..date).rev().find_map(|(d, daily)| {
        daily
            .workout_log
            .as_ref()
            .and_then(|w| w.exercise(exercise_id))
            .filter(|e| e.has_completed_set())
            .map(|e| (*d, e))
    })
}

/// Most recent workout strictly before `date` with at least one exercise
pub fn previous_workout(logs: &LogBook, date: NaiveDate) -> Option<&WorkoutLog> {
    logs.range(..date)
        .rev()
        .find_map(|(_, daily)| daily.workout_log.as_ref().filter(|w| w.has_exercises()))
}

/// Earlier sessions of one exercise, newest first, completed sets only
pub fn exercise_history(logs: &LogBook, exercise_id: &str, before: NaiveDate) -> Vec<ExerciseSession> {
    logs.range(..before)
        .rev()
        .filter_map(|(d, daily)| {
            let exercise = daily.workout_log.as_ref()?.exercise(exercise_id)?;
            let sets: Vec<LoggedSet> = exercise.completed_sets().copied().collect();
            let best_weight = sets.iter().map(|s| s.weight).fold(0.0, f64::max);
            let volume = sets.iter().map(LoggedSet::volume).sum();
            Some(ExerciseSession {
                date: *d,
                sets,
                best_weight,
                volume,
            })
        })
        .collect()
}

/// Compare a workout (possibly not started) with an earlier one.
///
/// Per-exercise rows cover only exercises present in both workouts, in the
/// earlier workout's order.
pub fn compare_sessions(
    current: Option<&WorkoutLog>,
    previous: &WorkoutLog,
) -> SessionComparison {
    let current_totals = current.map(workout_totals).unwrap_or_default();
    let previous_totals = workout_totals(previous);

    let exercises = previous
        .exercises
        .iter()
        .filter_map(|prev_ex| Some((prev_ex, current?.exercise(&prev_ex.exercise_id)?)))
        .map(|(prev_ex, cur_ex)| {
            let previous_best = best_set(&prev_ex.sets).copied();
            let current_best = best_set(&cur_ex.sets).copied();
            let weight_delta = match (current_best, previous_best) {
                (Some(now), Some(before)) => delta(now.weight, before.weight),
                _ => None,
            };
            ExerciseComparison {
                exercise_id: prev_ex.exercise_id.clone(),
                exercise_name: prev_ex.exercise_name.clone(),
                previous_best,
                current_best,
                weight_delta,
            }
        })
        .collect();

    SessionComparison {
        previous_date: previous.date,
        current: current_totals,
        previous: previous_totals,
        volume_delta: delta(current_totals.volume, previous_totals.volume),
        reps_delta: delta(current_totals.total_reps as f64, previous_totals.total_reps as f64),
        sets_delta: delta(current_totals.total_sets as f64, previous_totals.total_sets as f64),
        exercises,
    }
}

// ============================================================================
// Streaks and Records
// ============================================================================

/// Consecutive workout days walking back from `today`.
///
/// An empty today neither counts nor breaks the streak; any other empty day
/// ends the walk. At most `window_days` days are inspected.
pub fn streak(logs: &LogBook, today: NaiveDate, window_days: u32) -> u32 {
    let mut streak = 0;
    for offset in 0..window_days {
        let Some(date) = today.checked_sub_signed(Duration::days(i64::from(offset))) else {
            break;
        };
        if logs.get(&date).is_some_and(|d| d.has_workout()) {
            streak += 1;
        } else if offset > 0 {
            break;
        }
    }
    streak
}

/// Heaviest completed set with weight > 0 per exercise, heaviest first.
///
/// Dates are scanned oldest first, so the earliest of equally heavy sets is
/// kept.
pub fn best_lifts(logs: &LogBook, limit: usize) -> Vec<BestLift> {
    let mut bests: Vec<BestLift> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for (date, daily) in logs {
        let Some(workout) = &daily.workout_log else {
            continue;
        };
        for exercise in &workout.exercises {
            for set in exercise.completed_sets().filter(|s| s.weight > 0.0) {
                match index.get(exercise.exercise_id.as_str()).copied() {
                    Some(i) if set.weight > bests[i].weight => {
                        bests[i] = BestLift {
                            exercise_id: exercise.exercise_id.clone(),
                            exercise_name: exercise.exercise_name.clone(),
                            weight: set.weight,
                            reps: set.reps,
                            date: *date,
                        };
                    }
                    Some(_) => {}
                    None => {
                        index.insert(exercise.exercise_id.as_str(), bests.len());
                        bests.push(BestLift {
                            exercise_id: exercise.exercise_id.clone(),
                            exercise_name: exercise.exercise_name.clone(),
                            weight: set.weight,
                            reps: set.reps,
                            date: *date,
                        });
                    }
                }
            }
        }
    }

    bests.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    bests.truncate(limit);
    bests
}

// ============================================================================
// Range Queries
// ============================================================================

/// Day logs of the trailing `days`-day window ending at `today`, oldest
/// first. A window reaching past the calendar floor stops there.
fn trailing_window(
    logs: &LogBook,
    today: NaiveDate,
    days: u32,
) -> btree_map::Range<'_, NaiveDate, DailyLog> {
    let Some(span) = days.checked_sub(1) else {
        return logs.range(today..today);
    };
    let start = today
        .checked_sub_signed(Duration::days(i64::from(span)))
        .unwrap_or(NaiveDate::MIN);
    logs.range(start..=today)
}

/// Body-weight samples in the trailing window; days without one are skipped
pub fn recent_body_weights(logs: &LogBook, today: NaiveDate, days: u32) -> Vec<BodyWeightSample> {
    trailing_window(logs, today, days)
        .filter_map(|(date, daily)| {
            Some(BodyWeightSample {
                date: *date,
                weight: daily.body_weight?,
            })
        })
        .collect()
}

/// Workout logs in the trailing window, oldest first
pub fn recent_workout_logs(logs: &LogBook, today: NaiveDate, days: u32) -> Vec<&WorkoutLog> {
    trailing_window(logs, today, days)
        .filter_map(|(_, daily)| daily.workout_log.as_ref())
        .collect()
}

/// Summary of the trailing `range_days` window
pub fn progress_summary(
    logs: &LogBook,
    today: NaiveDate,
    range_days: u32,
    streak_window_days: u32,
    best_lifts_limit: usize,
) -> ProgressSummary {
    let workouts = recent_workout_logs(logs, today, range_days);
    let totals = workouts
        .iter()
        .map(|w| workout_totals(w))
        .fold(SessionTotals::default(), |mut acc, t| {
            acc.volume += t.volume;
            acc.total_reps = acc.total_reps.saturating_add(t.total_reps);
            acc.total_sets = acc.total_sets.saturating_add(t.total_sets);
            acc
        });

    ProgressSummary {
        range_days,
        total_workouts: workouts.len() as u32,
        total_sets: totals.total_sets,
        total_volume: totals.volume,
        streak_days: streak(logs, today, streak_window_days),
        body_weights: recent_body_weights(logs, today, range_days),
        best_lifts: best_lifts(logs, best_lifts_limit),
    }
}

// ============================================================================
// Plan vs Log
// ============================================================================

/// Join a day's logged exercises with the plan targets for that weekday.
///
/// Logged rows keep log order. Suggestions are the planned exercises not yet
/// logged; a rest day suggests nothing.
pub fn plan_vs_log(planned: Option<&WorkoutDay>, log: Option<&WorkoutLog>) -> PlannedVsLogged {
    let logged: Vec<ExerciseProgress> = log
        .map(|w| w.exercises.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|exercise| ExerciseProgress {
            exercise_id: exercise.exercise_id.clone(),
            exercise_name: exercise.exercise_name.clone(),
            target: planned.and_then(|d| d.planned(&exercise.exercise_id)).cloned(),
            completed_sets: exercise.completed_sets().count() as u32,
            total_sets: exercise.sets.len() as u32,
            totals: session_totals(&exercise.sets),
        })
        .collect();

    let suggestions = match planned {
        Some(day) if !day.is_rest_day => day
            .exercises
            .iter()
            .filter(|p| log.and_then(|w| w.exercise(&p.exercise_id)).is_none())
            .cloned()
            .collect(),
        _ => Vec::new(),
    };

    PlannedVsLogged {
        logged,
        suggestions,
    }
}

/// Rest / planned / empty status of each plan day, Monday through Sunday
pub fn week_strip(plan: &WorkoutPlan, today: DayOfWeek) -> Vec<WeekStripEntry> {
    plan.days
        .iter()
        .map(|d| WeekStripEntry {
            day: d.day,
            status: if d.is_rest_day {
                DayStatus::Rest
            } else if d.exercises.is_empty() {
                DayStatus::Empty
            } else {
                DayStatus::Planned
            },
            is_today: d.day == today,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlannedExercise;
    use proptest::prelude::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn set(n: u32, weight: f64, reps: u32, completed: bool) -> LoggedSet {
        LoggedSet {
            set_number: n,
            weight,
            reps,
            completed,
        }
    }

    fn log_exercise(book: &mut LogBook, d: NaiveDate, id: &str, sets: Vec<LoggedSet>) {
        let daily = book.entry(d).or_insert_with(|| DailyLog::new(d));
        let mut exercise = LoggedExercise::new(id, id);
        exercise.sets = sets;
        daily.workout_log_mut().upsert_exercise(exercise);
    }

    #[test]
    fn test_totals_ignore_incomplete_sets() {
        let sets = vec![
            set(1, 50.0, 10, true),
            set(2, 60.0, 5, false),
            set(3, 55.0, 8, true),
        ];
        let totals = session_totals(&sets);
        assert_eq!(totals.volume, 940.0);
        assert_eq!(totals.total_reps, 18);
        assert_eq!(totals.total_sets, 2);

        let stats = exercise_stats(&sets);
        assert_eq!(stats.avg_weight, 52.5);
        assert_eq!(exercise_stats(&Vec::<LoggedSet>::new()).avg_weight, 0.0);
    }

    #[test]
    fn test_best_set_excludes_incomplete() {
        let sets = vec![
            set(1, 50.0, 10, true),
            set(2, 60.0, 5, false),
            set(3, 55.0, 8, true),
        ];
        let best = best_set(&sets).unwrap();
        assert_eq!(best.weight, 55.0);
        assert_eq!(best.set_number, 3);
    }

    #[test]
    fn test_best_set_first_maximum_wins() {
        let sets = vec![set(1, 60.0, 5, true), set(2, 60.0, 8, true)];
        assert_eq!(best_set(&sets).unwrap().set_number, 1);
        assert!(best_set(&[set(1, 60.0, 5, false)]).is_none());
    }

    #[rstest]
    #[case(120.0, 100.0, Some((20.0, 20)))]
    #[case(80.0, 100.0, Some((-20.0, -20)))]
    #[case(105.0, 100.0, Some((5.0, 5)))]
    #[case(100.0, 100.0, Some((0.0, 0)))]
    #[case(80.0, 0.0, None)]
    #[case(0.0, 0.0, None)]
    fn test_delta(#[case] current: f64, #[case] previous: f64, #[case] expected: Option<(f64, i64)>) {
        let result = delta(current, previous).map(|d| (d.diff, d.pct));
        assert_eq!(result, expected);
    }

    #[test]
    fn test_delta_rounds_halves_up() {
        // -12.5% rounds to -12, 12.5% rounds to 13
        assert_eq!(delta(7.0, 8.0).unwrap().pct, -12);
        assert_eq!(delta(9.0, 8.0).unwrap().pct, 13);
    }

    #[test]
    fn test_previous_session_skips_days_without_completed_sets() {
        let mut book = LogBook::new();
        log_exercise(&mut book, date(2024, 1, 1), "bench_press", vec![set(1, 100.0, 5, true)]);
        log_exercise(&mut book, date(2024, 1, 3), "squat", vec![set(1, 140.0, 5, true)]);
        log_exercise(&mut book, date(2024, 1, 5), "bench_press", vec![set(1, 102.5, 5, false)]);
        log_exercise(&mut book, date(2024, 1, 8), "bench_press", vec![set(1, 105.0, 5, true)]);

        let (prev_date, prev) = previous_session(&book, "bench_press", date(2024, 1, 8)).unwrap();
        assert_eq!(prev_date, date(2024, 1, 1));
        assert_eq!(prev.sets[0].weight, 100.0);

        assert!(previous_session(&book, "bench_press", date(2024, 1, 1)).is_none());
    }

    #[test]
    fn test_previous_workout_requires_exercises() {
        let mut book = LogBook::new();
        log_exercise(&mut book, date(2024, 1, 1), "bench_press", vec![set(1, 100.0, 5, true)]);
        let empty_day = date(2024, 1, 2);
        book.entry(empty_day)
            .or_insert_with(|| DailyLog::new(empty_day))
            .workout_log_mut();

        let prev = previous_workout(&book, date(2024, 1, 3)).unwrap();
        assert_eq!(prev.date, date(2024, 1, 1));
    }

    #[test]
    fn test_exercise_history_newest_first() {
        let mut book = LogBook::new();
        log_exercise(&mut book, date(2024, 1, 1), "bench_press", vec![set(1, 100.0, 5, true)]);
        log_exercise(
            &mut book,
            date(2024, 1, 4),
            "bench_press",
            vec![set(1, 102.5, 5, true), set(2, 110.0, 1, false)],
        );
        log_exercise(&mut book, date(2024, 1, 8), "bench_press", vec![set(1, 105.0, 5, true)]);

        let history = exercise_history(&book, "bench_press", date(2024, 1, 8));
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].date, date(2024, 1, 4));
        assert_eq!(history[0].sets.len(), 1);
        assert_eq!(history[0].best_weight, 102.5);
        assert_eq!(history[1].volume, 500.0);
    }

    #[test]
    fn test_compare_sessions() {
        let mut book = LogBook::new();
        log_exercise(&mut book, date(2024, 1, 1), "bench_press", vec![set(1, 100.0, 5, true)]);
        log_exercise(&mut book, date(2024, 1, 8), "bench_press", vec![set(1, 105.0, 5, true)]);

        let today = book[&date(2024, 1, 8)].workout_log.as_ref();
        let previous = previous_workout(&book, date(2024, 1, 8)).unwrap();
        let cmp = compare_sessions(today, previous);

        assert_eq!(cmp.previous_date, date(2024, 1, 1));
        assert_eq!(cmp.volume_delta.unwrap().diff, 25.0);
        assert_eq!(cmp.volume_delta.unwrap().pct, 5);
        assert_eq!(cmp.sets_delta.unwrap().pct, 0);
        let bench = &cmp.exercises[0];
        assert_eq!(bench.weight_delta, Some(Delta { diff: 5.0, pct: 5 }));

        let not_started = compare_sessions(None, previous);
        assert_eq!(not_started.current, SessionTotals::default());
        assert!(not_started.exercises.is_empty());
    }

    #[test]
    fn test_compare_sessions_only_shared_exercises() {
        let mut book = LogBook::new();
        log_exercise(&mut book, date(2024, 1, 1), "bench_press", vec![set(1, 100.0, 5, true)]);
        log_exercise(&mut book, date(2024, 1, 1), "squat", vec![set(1, 140.0, 5, true)]);
        log_exercise(&mut book, date(2024, 1, 8), "bench_press", vec![set(1, 105.0, 5, true)]);
        log_exercise(&mut book, date(2024, 1, 8), "deadlift", vec![set(1, 180.0, 3, true)]);

        let today = book[&date(2024, 1, 8)].workout_log.as_ref();
        let previous = previous_workout(&book, date(2024, 1, 8)).unwrap();
        let comparison = compare_sessions(today, previous);
        let ids: Vec<&str> = comparison
            .exercises
            .iter()
            .map(|e| e.exercise_id.as_str())
            .collect();
        assert_eq!(ids, vec!["bench_press"]);
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let sets = vec![set(1, 1.0, u32::MAX, true), set(2, 1.0, 1, true)];
        let totals = session_totals(&sets);
        assert_eq!(totals.total_reps, u32::MAX);
        assert_eq!(totals.total_sets, 2);
    }

    #[test]
    fn test_streak_counts_consecutive_days() {
        let today = date(2024, 3, 10);
        let mut book = LogBook::new();
        for offset in 0..3 {
            let d = today - Duration::days(offset);
            log_exercise(&mut book, d, "squat", vec![set(1, 100.0, 5, true)]);
        }
        log_exercise(&mut book, today - Duration::days(4), "squat", vec![set(1, 100.0, 5, true)]);
        assert_eq!(streak(&book, today, DEFAULT_STREAK_WINDOW_DAYS), 3);
    }

    #[test]
    fn test_streak_forgives_empty_today() {
        let today = date(2024, 3, 10);
        let mut book = LogBook::new();
        for offset in 1..3 {
            let d = today - Duration::days(offset);
            log_exercise(&mut book, d, "squat", vec![set(1, 100.0, 5, true)]);
        }
        assert_eq!(streak(&book, today, DEFAULT_STREAK_WINDOW_DAYS), 2);
        assert_eq!(streak(&LogBook::new(), today, DEFAULT_STREAK_WINDOW_DAYS), 0);
    }

    #[test]
    fn test_streak_limited_by_window() {
        let today = date(2024, 3, 10);
        let mut book = LogBook::new();
        for offset in 0..40 {
            let d = today - Duration::days(offset);
            log_exercise(&mut book, d, "squat", vec![set(1, 100.0, 5, true)]);
        }
        assert_eq!(streak(&book, today, 30), 30);
    }

    #[test]
    fn test_best_lifts_top_by_weight() {
        let mut book = LogBook::new();
        log_exercise(
            &mut book,
            date(2024, 1, 1),
            "bench_press",
            vec![set(1, 100.0, 5, true), set(2, 120.0, 1, false)],
        );
        log_exercise(&mut book, date(2024, 1, 2), "squat", vec![set(1, 140.0, 5, true)]);
        log_exercise(&mut book, date(2024, 1, 3), "bench_press", vec![set(1, 105.0, 3, true)]);
        log_exercise(&mut book, date(2024, 1, 3), "plank", vec![set(1, 0.0, 60, true)]);

        let bests = best_lifts(&book, DEFAULT_BEST_LIFTS_LIMIT);
        assert_eq!(bests.len(), 2);
        assert_eq!(bests[0].exercise_id, "squat");
        assert_eq!(bests[1].weight, 105.0);
        assert_eq!(bests[1].date, date(2024, 1, 3));

        assert_eq!(best_lifts(&book, 1).len(), 1);
    }

    #[test]
    fn test_recent_queries_skip_gaps() {
        let today = date(2024, 3, 10);
        let mut book = LogBook::new();
        for offset in [0, 2, 9] {
            let d = today - Duration::days(offset);
            book.entry(d).or_insert_with(|| DailyLog::new(d)).body_weight = Some(80.0 + offset as f64);
        }
        log_exercise(&mut book, today - Duration::days(1), "squat", vec![]);

        let weights = recent_body_weights(&book, today, 7);
        assert_eq!(weights.len(), 2);
        assert_eq!(weights[0].date, today - Duration::days(2));
        assert_eq!(weights[1].weight, 80.0);

        let workouts = recent_workout_logs(&book, today, 7);
        assert_eq!(workouts.len(), 1);

        assert!(recent_body_weights(&book, today, 0).is_empty());
    }

    #[test]
    fn test_huge_window_reaches_calendar_floor() {
        let today = date(2024, 1, 8);
        let mut book = LogBook::new();
        book.entry(date(1900, 1, 1))
            .or_insert_with(|| DailyLog::new(date(1900, 1, 1)))
            .body_weight = Some(70.0);
        book.entry(today).or_insert_with(|| DailyLog::new(today)).body_weight = Some(80.0);

        let weights = recent_body_weights(&book, today, u32::MAX);
        assert_eq!(weights.len(), 2);
        assert_eq!(weights[0].date, date(1900, 1, 1));
        assert!(recent_workout_logs(&book, today, u32::MAX).is_empty());
        assert_eq!(streak(&book, NaiveDate::MIN, u32::MAX), 0);
    }

    #[test]
    fn test_plan_vs_log() {
        let mut day = WorkoutDay::new(DayOfWeek::Mon);
        for id in ["bench_press", "ohp"] {
            day.exercises.push(PlannedExercise {
                exercise_id: id.to_string(),
                exercise_name: id.to_string(),
                target_sets: 3,
                target_reps: 8,
                target_weight: None,
                notes: None,
            });
        }
        let mut log = WorkoutLog::new(date(2024, 1, 1));
        let mut bench = LoggedExercise::new("bench_press", "Bench Press");
        bench.add_set(100.0, 5, true);
        bench.add_set(100.0, 5, false);
        log.upsert_exercise(bench);
        log.upsert_exercise(LoggedExercise::new("dips", "Dips"));

        let merged = plan_vs_log(Some(&day), Some(&log));
        assert_eq!(merged.logged.len(), 2);
        assert_eq!(merged.logged[0].target.as_ref().unwrap().target_sets, 3);
        assert_eq!(merged.logged[0].completed_sets, 1);
        assert_eq!(merged.logged[0].total_sets, 2);
        assert!(merged.logged[1].target.is_none());
        assert_eq!(merged.suggestions.len(), 1);
        assert_eq!(merged.suggestions[0].exercise_id, "ohp");

        day.toggle_rest_day();
        assert!(plan_vs_log(Some(&day), None).suggestions.is_empty());
    }

    #[test]
    fn test_week_strip() {
        let mut plan = WorkoutPlan::default();
        plan.days[0].exercises.push(PlannedExercise {
            exercise_id: "squat".to_string(),
            exercise_name: "Barbell Squat".to_string(),
            target_sets: 5,
            target_reps: 5,
            target_weight: None,
            notes: None,
        });
        let strip = week_strip(&plan, DayOfWeek::Tue);
        assert_eq!(strip[0].status, DayStatus::Planned);
        assert_eq!(strip[1].status, DayStatus::Empty);
        assert!(strip[1].is_today);
        assert_eq!(strip.len(), 7);
        assert_eq!(strip[6].day, DayOfWeek::Sun);
        assert_eq!(strip[6].status, DayStatus::Rest);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: best set is a completed set no lighter than any other completed set
        #[test]
        fn prop_best_set_is_max_completed(
            raw in prop::collection::vec((0u32..200, 0u32..20, any::<bool>()), 0..15)
        ) {
            let sets: Vec<LoggedSet> = raw
                .iter()
                .enumerate()
                .map(|(i, (w, r, c))| set(i as u32 + 1, *w as f64, *r, *c))
                .collect();
            match best_set(&sets) {
                Some(best) => {
                    prop_assert!(best.completed);
                    prop_assert!(sets.iter().filter(|s| s.completed).all(|s| s.weight <= best.weight));
                }
                None => prop_assert!(sets.iter().all(|s| !s.completed)),
            }
        }

        /// Property: totals count exactly the completed sets
        #[test]
        fn prop_totals_count_completed(
            raw in prop::collection::vec((0u32..200, 0u32..20, any::<bool>()), 0..15)
        ) {
            let sets: Vec<LoggedSet> = raw
                .iter()
                .enumerate()
                .map(|(i, (w, r, c))| set(i as u32 + 1, *w as f64, *r, *c))
                .collect();
            let totals = session_totals(&sets);
            prop_assert_eq!(totals.total_sets as usize, sets.iter().filter(|s| s.completed).count());
        }
    }
}
