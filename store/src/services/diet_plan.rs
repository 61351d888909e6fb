//! Weekly diet plan store

use gymmania_shared::validation::{validate_macros, validate_quantity};
use gymmania_shared::{
    macro_progress, DayOfWeek, DietDay, DietGoal, DietPlan, MacroNutrients, MacroProgress,
    MealType, PlannedMeal, PlannedMealItem,
};
use tracing::{debug, info, warn};

use crate::error::StoreResult;
use crate::persist::Persister;
use crate::repositories::DocumentRepository;
use crate::storage::KeyValueStore;

pub struct DietPlanStore {
    plan: DietPlan,
    key: String,
    persister: Persister,
}

fn validate_item(item: &PlannedMealItem) -> StoreResult<()> {
    validate_quantity(item.quantity)?;
    validate_macros(&item.macros)?;
    Ok(())
}

fn validate_meal(meal: &PlannedMeal) -> StoreResult<()> {
    meal.items.iter().try_for_each(validate_item)
}

impl DietPlanStore {
    pub async fn load(store: &dyn KeyValueStore, key: &str, persister: Persister) -> Self {
        let plan = DocumentRepository::load(store, key).await;
        Self {
            plan,
            key: key.to_string(),
            persister,
        }
    }

    pub fn plan(&self) -> &DietPlan {
        &self.plan
    }

    pub fn day(&self, day: DayOfWeek) -> Option<&DietDay> {
        self.plan.day(day)
    }

    /// Planned intake for the day, rounded per field
    pub fn day_total_macros(&self, day: DayOfWeek) -> Option<MacroNutrients> {
        self.day(day).map(DietDay::total_macros)
    }

    /// Planned intake against the day's targets
    pub fn day_progress(&self, day: DayOfWeek) -> Option<MacroProgress> {
        self.day(day)
            .map(|d| macro_progress(d.total_macros(), d.target_macros))
    }

    /// Switch goal. Every day's targets are overwritten with the preset,
    /// including days that were customized.
    pub fn set_goal(&mut self, goal: DietGoal) {
        info!(
            from = ?self.plan.goal,
            to = ?goal,
            "Diet goal changed; resetting targets on every day"
        );
        self.plan.set_goal(goal);
        self.persist();
    }

    pub fn set_day_targets(&mut self, day: DayOfWeek, targets: MacroNutrients) -> StoreResult<()> {
        validate_macros(&targets)?;
        self.mutate_day(day, |d| d.set_targets(targets));
        Ok(())
    }

    /// Insert the meal, replacing any meal of the same type
    pub fn add_meal(&mut self, day: DayOfWeek, meal: PlannedMeal) -> StoreResult<()> {
        validate_meal(&meal)?;
        self.mutate_day(day, |d| d.upsert_meal(meal));
        Ok(())
    }

    /// Replace the meal of `meal_type`; nothing happens when the day has none
    pub fn update_meal(
        &mut self,
        day: DayOfWeek,
        meal_type: MealType,
        meal: PlannedMeal,
    ) -> StoreResult<()> {
        validate_meal(&meal)?;
        self.mutate_day(day, |d| {
            if !d.replace_meal(meal_type, meal) {
                debug!(%day, %meal_type, "No planned meal to update");
            }
        });
        Ok(())
    }

    pub fn remove_meal(&mut self, day: DayOfWeek, meal_type: MealType) {
        self.mutate_day(day, |d| d.remove_meal(meal_type));
    }

    pub fn add_food_to_meal(
        &mut self,
        day: DayOfWeek,
        meal_type: MealType,
        item: PlannedMealItem,
    ) -> StoreResult<()> {
        validate_item(&item)?;
        self.mutate_day(day, |d| d.add_food(meal_type, item));
        Ok(())
    }

    fn mutate_day(&mut self, day: DayOfWeek, f: impl FnOnce(&mut DietDay)) {
        match self.plan.day_mut(day) {
            Some(diet_day) => {
                f(diet_day);
                debug!(%day, "Diet plan updated");
                self.persist();
            }
            None => debug!(%day, "Diet plan has no such day; ignoring"),
        }
    }

    fn persist(&self) {
        match DocumentRepository::encode(&self.plan) {
            Ok(json) => self.persister.schedule(&self.key, json),
            Err(e) => warn!(error = %e, "Failed to encode diet plan"),
        }
    }
}
