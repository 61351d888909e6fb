//! Stores and read-side services
//!
//! Each store owns one persisted document in memory and schedules a write of
//! the whole document after every mutation.

pub mod daily_log;
pub mod diet_plan;
pub mod progress;
pub mod workout_plan;

pub use daily_log::LogStore;
pub use diet_plan::DietPlanStore;
pub use progress::{ExerciseInsight, ProgressService, WorkoutDashboard};
pub use workout_plan::WorkoutPlanStore;
