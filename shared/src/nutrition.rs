//! Macro-nutrient aggregation and target progress
//!
//! Totals are summed unrounded and rounded once per field at the end, so
//! `aggregate_macros` is order-independent up to floating point and never
//! accumulates per-item rounding error.

use crate::models::MacroNutrients;
use crate::types::MacroProgress;

/// A quantity of food with per-serving macros
pub trait Portion {
    fn macros(&self) -> &MacroNutrients;
    fn quantity(&self) -> f64;

    /// Unrounded macros for this portion
    fn scaled_macros(&self) -> MacroNutrients {
        self.macros().scaled(self.quantity())
    }
}

/// Sum `macros × quantity` over every portion, then round each field
pub fn aggregate_macros<'a, P, I>(portions: I) -> MacroNutrients
where
    P: Portion + 'a,
    I: IntoIterator<Item = &'a P>,
{
    portions
        .into_iter()
        .fold(MacroNutrients::ZERO, |acc, p| acc + p.scaled_macros())
        .rounded()
}

/// Percentage of `target` reached by `actual`, capped at 100.
/// A zero target yields 0.
pub fn progress_percent(actual: f64, target: f64) -> u32 {
    if target <= 0.0 {
        return 0;
    }
    let pct = (actual / target * 100.0).round();
    pct.clamp(0.0, 100.0) as u32
}

/// Per-field progress of `actual` against `target`
pub fn macro_progress(actual: MacroNutrients, target: MacroNutrients) -> MacroProgress {
    MacroProgress {
        actual,
        target,
        calories_pct: progress_percent(actual.calories, target.calories),
        protein_pct: progress_percent(actual.protein, target.protein),
        carbs_pct: progress_percent(actual.carbs, target.carbs),
        fat_pct: progress_percent(actual.fat, target.fat),
    }
}
