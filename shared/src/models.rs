//! Plan and catalog models for the GymMania application
//!
//! Plans are recurring weekly templates keyed by day-of-week. Every plan holds
//! exactly seven day entries, Monday first.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::DomainError;
use crate::nutrition::{aggregate_macros, Portion};

// ============================================================================
// Days and Categories
// ============================================================================

/// Day-of-week tag used to key plan days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayOfWeek {
    /// All seven days in plan order
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Mon,
        DayOfWeek::Tue,
        DayOfWeek::Wed,
        DayOfWeek::Thu,
        DayOfWeek::Fri,
        DayOfWeek::Sat,
        DayOfWeek::Sun,
    ];

    /// Day-of-week of a calendar date
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    /// Short label, e.g. "Mon"
    pub fn abbreviation(&self) -> &'static str {
        match self {
            DayOfWeek::Mon => "Mon",
            DayOfWeek::Tue => "Tue",
            DayOfWeek::Wed => "Wed",
            DayOfWeek::Thu => "Thu",
            DayOfWeek::Fri => "Fri",
            DayOfWeek::Sat => "Sat",
            DayOfWeek::Sun => "Sun",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Mon,
            Weekday::Tue => DayOfWeek::Tue,
            Weekday::Wed => DayOfWeek::Wed,
            Weekday::Thu => DayOfWeek::Thu,
            Weekday::Fri => DayOfWeek::Fri,
            Weekday::Sat => DayOfWeek::Sat,
            Weekday::Sun => DayOfWeek::Sun,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for DayOfWeek {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mon" | "monday" => Ok(DayOfWeek::Mon),
            "tue" | "tuesday" => Ok(DayOfWeek::Tue),
            "wed" | "wednesday" => Ok(DayOfWeek::Wed),
            "thu" | "thursday" => Ok(DayOfWeek::Thu),
            "fri" | "friday" => Ok(DayOfWeek::Fri),
            "sat" | "saturday" => Ok(DayOfWeek::Sat),
            "sun" | "sunday" => Ok(DayOfWeek::Sun),
            _ => Err(DomainError::InvalidDay(s.to_string())),
        }
    }
}

/// Muscle group an exercise is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
    Cardio,
    #[serde(rename = "Full Body")]
    FullBody,
}

/// Meal category; a day holds at most one meal per type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    #[serde(rename = "Pre-Workout")]
    PreWorkout,
    #[serde(rename = "Post-Workout")]
    PostWorkout,
}

impl MealType {
    pub const ALL: [MealType; 6] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
        MealType::PreWorkout,
        MealType::PostWorkout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
            MealType::PreWorkout => "Pre-Workout",
            MealType::PostWorkout => "Post-Workout",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for MealType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealType::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::InvalidMealType(s.to_string()))
    }
}

// ============================================================================
// Catalog Entities
// ============================================================================

/// Reference exercise entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub equipment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Macro-nutrient quantities. Protein, carbs and fat are grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroNutrients {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroNutrients {
    pub const ZERO: MacroNutrients = MacroNutrients::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Multiply every field by a serving quantity
    pub fn scaled(&self, quantity: f64) -> Self {
        Self {
            calories: self.calories * quantity,
            protein: self.protein * quantity,
            carbs: self.carbs * quantity,
            fat: self.fat * quantity,
        }
    }

    /// Round every field to the nearest integer
    pub fn rounded(&self) -> Self {
        Self {
            calories: self.calories.round(),
            protein: self.protein.round(),
            carbs: self.carbs.round(),
            fat: self.fat.round(),
        }
    }
}

impl std::ops::Add for MacroNutrients {
    type Output = MacroNutrients;

    fn add(self, rhs: MacroNutrients) -> MacroNutrients {
        MacroNutrients {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl std::ops::AddAssign for MacroNutrients {
    fn add_assign(&mut self, rhs: MacroNutrients) {
        *self = *self + rhs;
    }
}

/// Reference food entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub macros: MacroNutrients,
    /// e.g. "100g", "1 cup"
    pub serving_size: String,
}

// ============================================================================
// Workout Plan
// ============================================================================

/// Exercise scheduled on a plan day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
    pub exercise_id: String,
    /// Snapshot of the catalog name at the time the exercise was added
    pub exercise_name: String,
    pub target_sets: u32,
    pub target_reps: u32,
    /// kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PlannedExercise {
    /// Plan a catalog exercise, snapshotting its display name
    pub fn from_exercise(exercise: &Exercise, target_sets: u32, target_reps: u32) -> Self {
        Self {
            exercise_id: exercise.id.clone(),
            exercise_name: exercise.name.clone(),
            target_sets,
            target_reps,
            target_weight: None,
            notes: None,
        }
    }
}

/// Partial update applied to a planned exercise
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannedExerciseUpdate {
    pub target_sets: Option<u32>,
    pub target_reps: Option<u32>,
    pub target_weight: Option<f64>,
    pub notes: Option<String>,
}

impl PlannedExerciseUpdate {
    fn apply(&self, exercise: &mut PlannedExercise) {
        if let Some(sets) = self.target_sets {
            exercise.target_sets = sets;
        }
        if let Some(reps) = self.target_reps {
            exercise.target_reps = reps;
        }
        if let Some(weight) = self.target_weight {
            exercise.target_weight = Some(weight);
        }
        if let Some(notes) = &self.notes {
            exercise.notes = Some(notes.clone());
        }
    }
}

/// One day of the weekly workout template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    pub day: DayOfWeek,
    /// e.g. "Push Day"
    pub name: String,
    pub exercises: Vec<PlannedExercise>,
    pub is_rest_day: bool,
}

impl WorkoutDay {
    pub fn new(day: DayOfWeek) -> Self {
        Self {
            day,
            name: String::new(),
            exercises: Vec::new(),
            is_rest_day: day == DayOfWeek::Sun,
        }
    }

    /// Flip the rest flag. The exercise list is cleared either way and is not
    /// restored by toggling back.
    pub fn toggle_rest_day(&mut self) {
        self.is_rest_day = !self.is_rest_day;
        self.exercises.clear();
    }

    /// Apply a partial update to the exercise with the given id.
    /// Returns false when no such exercise is planned.
    pub fn update_exercise(&mut self, exercise_id: &str, update: &PlannedExerciseUpdate) -> bool {
        match self.exercises.iter_mut().find(|e| e.exercise_id == exercise_id) {
            Some(exercise) => {
                update.apply(exercise);
                true
            }
            None => false,
        }
    }

    pub fn remove_exercise(&mut self, exercise_id: &str) {
        self.exercises.retain(|e| e.exercise_id != exercise_id);
    }

    pub fn planned(&self, exercise_id: &str) -> Option<&PlannedExercise> {
        self.exercises.iter().find(|e| e.exercise_id == exercise_id)
    }
}

/// Weekly workout template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPlan {
    pub id: String,
    pub name: String,
    pub days: Vec<WorkoutDay>,
}

impl Default for WorkoutPlan {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            name: "My Workout Plan".to_string(),
            days: DayOfWeek::ALL.into_iter().map(WorkoutDay::new).collect(),
        }
    }
}

impl WorkoutPlan {
    /// Create a named plan with default days and a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn day(&self, day: DayOfWeek) -> Option<&WorkoutDay> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn day_mut(&mut self, day: DayOfWeek) -> Option<&mut WorkoutDay> {
        self.days.iter_mut().find(|d| d.day == day)
    }

    /// True when the plan holds each of the seven days exactly once
    pub fn has_complete_week(&self) -> bool {
        is_complete_week(self.days.iter().map(|d| d.day))
    }
}

// ============================================================================
// Diet Plan
// ============================================================================

/// Diet goal; selects the preset daily targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DietGoal {
    Cut,
    Bulk,
    #[default]
    Maintain,
}

impl DietGoal {
    /// Preset daily macro targets for the goal
    pub fn targets(&self) -> MacroNutrients {
        match self {
            DietGoal::Cut => MacroNutrients::new(2000.0, 180.0, 180.0, 55.0),
            DietGoal::Bulk => MacroNutrients::new(3000.0, 200.0, 330.0, 80.0),
            DietGoal::Maintain => MacroNutrients::new(2500.0, 180.0, 270.0, 70.0),
        }
    }
}

impl std::str::FromStr for DietGoal {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cut" => Ok(DietGoal::Cut),
            "bulk" => Ok(DietGoal::Bulk),
            "maintain" => Ok(DietGoal::Maintain),
            _ => Err(DomainError::InvalidGoal(s.to_string())),
        }
    }
}

/// Food line within a planned meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMealItem {
    pub food_id: String,
    pub food_name: String,
    /// Number of servings
    pub quantity: f64,
    /// Per-serving macros at the time the item was added
    pub macros: MacroNutrients,
}

impl PlannedMealItem {
    pub fn from_food(food: &FoodItem, quantity: f64) -> Self {
        Self {
            food_id: food.id.clone(),
            food_name: food.name.clone(),
            quantity,
            macros: food.macros,
        }
    }
}

impl Portion for PlannedMealItem {
    fn macros(&self) -> &MacroNutrients {
        &self.macros
    }

    fn quantity(&self) -> f64 {
        self.quantity
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    pub meal_type: MealType,
    pub items: Vec<PlannedMealItem>,
}

impl PlannedMeal {
    pub fn total_macros(&self) -> MacroNutrients {
        aggregate_macros(&self.items)
    }
}

/// One day of the weekly diet template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DietDay {
    pub day: DayOfWeek,
    pub meals: Vec<PlannedMeal>,
    pub target_calories: f64,
    pub target_macros: MacroNutrients,
}

impl DietDay {
    pub fn new(day: DayOfWeek, goal: DietGoal) -> Self {
        let mut diet_day = Self {
            day,
            meals: Vec::new(),
            target_calories: 0.0,
            target_macros: MacroNutrients::ZERO,
        };
        diet_day.set_targets(goal.targets());
        diet_day
    }

    /// Overwrite the day's targets; target calories follow `targets.calories`
    pub fn set_targets(&mut self, targets: MacroNutrients) {
        self.target_calories = targets.calories;
        self.target_macros = targets;
    }

    pub fn meal(&self, meal_type: MealType) -> Option<&PlannedMeal> {
        self.meals.iter().find(|m| m.meal_type == meal_type)
    }

    /// Insert the meal, or replace the existing meal of the same type in place
    pub fn upsert_meal(&mut self, meal: PlannedMeal) {
        match self.meals.iter_mut().find(|m| m.meal_type == meal.meal_type) {
            Some(existing) => *existing = meal,
            None => self.meals.push(meal),
        }
    }

    /// Replace the meal of `meal_type`. Returns false when the day has none.
    pub fn replace_meal(&mut self, meal_type: MealType, meal: PlannedMeal) -> bool {
        match self.meals.iter_mut().find(|m| m.meal_type == meal_type) {
            Some(existing) => {
                *existing = meal;
                true
            }
            None => false,
        }
    }

    pub fn remove_meal(&mut self, meal_type: MealType) {
        self.meals.retain(|m| m.meal_type != meal_type);
    }

    /// Append a food line to the meal of `meal_type`, creating the meal if needed
    pub fn add_food(&mut self, meal_type: MealType, item: PlannedMealItem) {
        match self.meals.iter_mut().find(|m| m.meal_type == meal_type) {
            Some(meal) => meal.items.push(item),
            None => self.meals.push(PlannedMeal {
                meal_type,
                items: vec![item],
            }),
        }
    }

    /// Planned intake across every meal, rounded per field
    pub fn total_macros(&self) -> MacroNutrients {
        aggregate_macros(self.meals.iter().flat_map(|m| m.items.iter()))
    }
}

/// Weekly diet template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietPlan {
    pub id: String,
    pub name: String,
    pub goal: DietGoal,
    pub days: Vec<DietDay>,
}

impl Default for DietPlan {
    fn default() -> Self {
        let goal = DietGoal::default();
        Self {
            id: "default".to_string(),
            name: "My Diet Plan".to_string(),
            goal,
            days: DayOfWeek::ALL
                .into_iter()
                .map(|day| DietDay::new(day, goal))
                .collect(),
        }
    }
}

impl DietPlan {
    pub fn new(name: impl Into<String>, goal: DietGoal) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            goal,
            days: DayOfWeek::ALL
                .into_iter()
                .map(|day| DietDay::new(day, goal))
                .collect(),
        }
    }

    pub fn day(&self, day: DayOfWeek) -> Option<&DietDay> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn day_mut(&mut self, day: DayOfWeek) -> Option<&mut DietDay> {
        self.days.iter_mut().find(|d| d.day == day)
    }

    /// Switch goal and overwrite every day's targets with its preset.
    /// Per-day customizations are discarded.
    pub fn set_goal(&mut self, goal: DietGoal) {
        self.goal = goal;
        let targets = goal.targets();
        for day in &mut self.days {
            day.set_targets(targets);
        }
    }

    pub fn has_complete_week(&self) -> bool {
        is_complete_week(self.days.iter().map(|d| d.day))
    }
}

fn is_complete_week(days: impl Iterator<Item = DayOfWeek>) -> bool {
    let mut seen = [false; 7];
    let mut count = 0;
    for day in days {
        let idx = day as usize;
        if seen[idx] {
            return false;
        }
        seen[idx] = true;
        count += 1;
    }
    count == 7
}
