//! GymMania WASM Module
//!
//! WebAssembly bindings for the macro and training calculations so the
//! browser shows the same numbers as the stores.

use gymmania_shared::stats;
use gymmania_shared::{aggregate_macros, progress_percent, LoggedSet, MacroNutrients, Portion};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Any meal item, planned or logged; other fields are ignored
#[derive(Debug, Deserialize)]
struct PortionLine {
    quantity: f64,
    macros: MacroNutrients,
}

impl Portion for PortionLine {
    fn macros(&self) -> &MacroNutrients {
        &self.macros
    }

    fn quantity(&self) -> f64 {
        self.quantity
    }
}

#[derive(Debug, Deserialize)]
struct MealLines {
    items: Vec<PortionLine>,
}

fn meal_macros_json(meals_json: &str) -> Result<String, String> {
    let meals: Vec<MealLines> = serde_json::from_str(meals_json).map_err(|e| e.to_string())?;
    let total = aggregate_macros(meals.iter().flat_map(|m| m.items.iter()));
    serde_json::to_string(&total).map_err(|e| e.to_string())
}

fn sets_volume(sets_json: &str) -> Result<f64, String> {
    let sets: Vec<LoggedSet> = serde_json::from_str(sets_json).map_err(|e| e.to_string())?;
    Ok(stats::session_totals(&sets).volume)
}

/// Total macros of a JSON array of meals, summed then rounded per field.
/// Returns the totals as JSON.
#[wasm_bindgen]
pub fn aggregate_meal_macros(meals_json: &str) -> Result<String, JsValue> {
    meal_macros_json(meals_json).map_err(|e| JsValue::from_str(&e))
}

/// Rounded percentage change, or undefined when `previous` is zero
#[wasm_bindgen]
pub fn percent_change(current: f64, previous: f64) -> Option<i32> {
    stats::delta(current, previous).map(|d| d.pct as i32)
}

/// Volume of the completed sets in a JSON array of logged sets
#[wasm_bindgen]
pub fn session_volume(sets_json: &str) -> Result<f64, JsValue> {
    sets_volume(sets_json).map_err(|e| JsValue::from_str(&e))
}

/// Target progress capped at 100; 0 for a zero target
#[wasm_bindgen]
pub fn macro_progress_percent(actual: f64, target: f64) -> u32 {
    progress_percent(actual, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_macros_accepts_planned_and_logged_items() {
        let meals = r#"[
            {"mealType": "Breakfast", "items": [
                {"foodId": "oats", "foodName": "Oats", "quantity": 0.5,
                 "macros": {"calories": 389, "protein": 17, "carbs": 66, "fat": 7}}
            ]},
            {"mealType": "Lunch", "items": [
                {"foodName": "Chicken Breast", "quantity": 1.5,
                 "macros": {"calories": 165, "protein": 31, "carbs": 0, "fat": 3.6}}
            ]}
        ]"#;
        let total: MacroNutrients = serde_json::from_str(&meal_macros_json(meals).unwrap()).unwrap();
        // 194.5 + 247.5
        assert_eq!(total.calories, 442.0);
        assert_eq!(total.protein, 55.0);
        assert_eq!(total.fat, 9.0);
    }

    #[test]
    fn test_meal_macros_rejects_bad_json() {
        assert!(meal_macros_json("{}").is_err());
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(120.0, 100.0), Some(20));
        assert_eq!(percent_change(80.0, 0.0), None);
    }

    #[test]
    fn test_session_volume_counts_completed_sets() {
        let sets = r#"[
            {"setNumber": 1, "weight": 50, "reps": 10, "completed": true},
            {"setNumber": 2, "weight": 60, "reps": 5, "completed": false}
        ]"#;
        assert_eq!(sets_volume(sets).unwrap(), 500.0);
    }

    #[test]
    fn test_macro_progress_percent() {
        assert_eq!(macro_progress_percent(90.0, 180.0), 50);
        assert_eq!(macro_progress_percent(90.0, 0.0), 0);
    }
}
