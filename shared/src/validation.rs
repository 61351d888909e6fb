//! Input validation functions
//!
//! Checks applied to user-entered numbers and text before they reach a log or
//! plan. Every check rejects NaN and infinities.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::models::MacroNutrients;

/// Upper bound for reps in one set
pub const MAX_REPS: u32 = 1000;
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;
pub const MAX_NOTES_LEN: usize = 2000;

static DATE_KEY: Lazy<Result<Regex, regex_lite::Error>> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$"));

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(field, "must be a valid number"));
    }
    if value < 0.0 {
        return Err(ValidationError::new(field, "cannot be negative"));
    }
    Ok(())
}

/// Validate a set weight (kg). Zero is allowed for bodyweight movements.
pub fn validate_set_weight(weight: f64) -> Result<(), ValidationError> {
    non_negative("weight", weight)
}

pub fn validate_reps(reps: u32) -> Result<(), ValidationError> {
    if reps > MAX_REPS {
        return Err(ValidationError::new("reps", "must be at most 1000"));
    }
    Ok(())
}

/// Validate a body-weight reading (kg)
pub fn validate_body_weight(weight_kg: f64) -> Result<(), ValidationError> {
    non_negative("body_weight", weight_kg)
}

/// Validate a serving quantity; zero servings is a valid entry
pub fn validate_quantity(quantity: f64) -> Result<(), ValidationError> {
    non_negative("quantity", quantity)
}

pub fn validate_water_liters(liters: f64) -> Result<(), ValidationError> {
    non_negative("water_intake_liters", liters)
}

pub fn validate_duration_minutes(minutes: u32) -> Result<(), ValidationError> {
    if minutes > MAX_DURATION_MINUTES {
        return Err(ValidationError::new(
            "duration_minutes",
            "cannot exceed 24 hours",
        ));
    }
    Ok(())
}

/// Validate per-serving macros; every field must be non-negative
pub fn validate_macros(macros: &MacroNutrients) -> Result<(), ValidationError> {
    non_negative("calories", macros.calories)?;
    non_negative("protein", macros.protein)?;
    non_negative("carbs", macros.carbs)?;
    non_negative("fat", macros.fat)
}

pub fn validate_notes(notes: &str) -> Result<(), ValidationError> {
    if notes.chars().count() > MAX_NOTES_LEN {
        return Err(ValidationError::new("notes", "is too long"));
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` log key
pub fn parse_date_key(key: &str) -> Result<NaiveDate, ValidationError> {
    let pattern = DATE_KEY
        .as_ref()
        .map_err(|e| ValidationError::new("date", &e.to_string()))?;
    if !pattern.is_match(key) {
        return Err(ValidationError::new("date", "must be formatted YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(key, "%Y-%m-%d")
        .map_err(|_| ValidationError::new("date", "is not a calendar date"))
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" => "Weight",
        "reps" => "Reps",
        "body_weight" => "Body Weight",
        "quantity" => "Quantity",
        "water_intake_liters" => "Water Intake",
        "duration_minutes" => "Duration",
        "calories" => "Calories",
        "protein" => "Protein",
        "carbs" => "Carbs",
        "fat" => "Fat",
        "notes" => "Notes",
        "date" => "Date",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}
