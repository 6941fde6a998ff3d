use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::GrubError;
use crate::models::recipe::{Ingredient, MealCategory, Recipe};
use crate::models::shopping::ShoppingList;

/// Scheduled eating occasion within a day. Cracker barrel is the late-evening
/// snack slot on the arrival day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    #[serde(rename = "Cracker Barrel")]
    CrackerBarrel,
}

impl MealSlot {
    /// The recipe category this slot draws from.
    pub fn category(&self) -> MealCategory {
        match self {
            MealSlot::Breakfast => MealCategory::Breakfast,
            MealSlot::Lunch => MealCategory::Lunch,
            MealSlot::Dinner => MealCategory::Dinner,
            MealSlot::CrackerBarrel => MealCategory::Snack,
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::CrackerBarrel => "Cracker Barrel",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for MealSlot {
    type Err = GrubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', " ").as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            "cracker barrel" | "snack" => Ok(MealSlot::CrackerBarrel),
            other => Err(GrubError::InvalidInput(format!(
                "Unknown meal slot '{}'",
                other
            ))),
        }
    }
}

/// One planned meal: the slot it fills, the selected recipes, and their
/// ingredient lists scaled to the trip roster.
///
/// Meals are values. Editing helpers return a new `Meal` with
/// `scaled_ingredients` recomputed rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    #[serde(rename = "type")]
    pub slot: MealSlot,

    /// Snapshot copies of the selected recipes, so saved trips stay
    /// self-contained when the catalog changes later.
    pub recipes: Vec<Recipe>,

    pub scaled_ingredients: Vec<Ingredient>,
}

impl Meal {
    pub fn new(slot: MealSlot, recipes: Vec<Recipe>, scaled_ingredients: Vec<Ingredient>) -> Self {
        Self {
            slot,
            recipes,
            scaled_ingredients,
        }
    }

    /// Cost of this meal at the roster size it was scaled for.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.scaled_ingredients.iter().map(|i| i.cost).sum()
    }

    pub fn has_recipe(&self, recipe_id: &str) -> bool {
        self.recipes.iter().any(|r| r.id == recipe_id)
    }

    pub fn recipe_names(&self) -> Vec<&str> {
        self.recipes.iter().map(|r| r.name.as_str()).collect()
    }
}

/// All meals scheduled for one trip day. `day` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,

    pub meals: Vec<Meal>,
}

impl DayPlan {
    pub fn cost(&self) -> f64 {
        self.meals.iter().map(Meal::cost).sum()
    }
}

/// Full schedule for a trip, one entry per day.
pub type MealPlan = Vec<DayPlan>;

/// A saved trip: the parameters it was planned for plus the generated plan
/// and its derived shopping list and total cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,

    pub trip_name: String,

    pub num_scouts: u32,

    pub days: u32,

    pub start_date: NaiveDate,

    pub plan: MealPlan,

    pub shopping_list: ShoppingList,

    pub total_cost: f64,
}

impl Trip {
    /// Planned cost split across the roster.
    #[inline]
    pub fn per_scout_cost(&self) -> f64 {
        self.total_cost / self.num_scouts as f64
    }

    /// Planned per-scout cost split across trip days.
    #[inline]
    pub fn per_scout_per_day_cost(&self) -> f64 {
        self.per_scout_cost() / self.days.max(1) as f64
    }

    /// Calendar date of a 1-based plan day.
    pub fn date_of_day(&self, day: u32) -> NaiveDate {
        self.start_date + chrono::Days::new(u64::from(day.saturating_sub(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meal() -> Meal {
        let recipe = Recipe {
            id: "r2".to_string(),
            name: "Walking Tacos".to_string(),
            category: MealCategory::Lunch,
            servings: 10,
            ingredients: vec![
                Ingredient::new("Ground beef", 2.0, "lbs", 10.0),
                Ingredient::new("Chip bags", 10.0, "bags", 8.0),
            ],
            instructions: None,
            prep_time: Some("25 mins".to_string()),
        };
        let scaled = recipe.ingredients.clone();
        Meal::new(MealSlot::Lunch, vec![recipe], scaled)
    }

    #[test]
    fn test_meal_cost_sums_scaled_lines() {
        let meal = sample_meal();
        assert!((meal.cost() - 18.0).abs() < 0.001);
    }

    #[test]
    fn test_slot_display_and_category() {
        assert_eq!(MealSlot::CrackerBarrel.to_string(), "Cracker Barrel");
        assert_eq!(MealSlot::CrackerBarrel.category(), MealCategory::Snack);
        assert_eq!(MealSlot::Breakfast.category(), MealCategory::Breakfast);
    }

    #[test]
    fn test_slot_parsing() {
        assert_eq!("dinner".parse::<MealSlot>().unwrap(), MealSlot::Dinner);
        assert_eq!(
            "cracker-barrel".parse::<MealSlot>().unwrap(),
            MealSlot::CrackerBarrel
        );
        assert_eq!(
            "Cracker Barrel".parse::<MealSlot>().unwrap(),
            MealSlot::CrackerBarrel
        );
        assert!("supper".parse::<MealSlot>().is_err());
    }

    #[test]
    fn test_trip_per_scout_figures() {
        let trip = Trip {
            id: "trip_1".to_string(),
            trip_name: "Fall Campout".to_string(),
            num_scouts: 10,
            days: 3,
            start_date: NaiveDate::from_ymd_opt(2025, 6, 13).unwrap(),
            plan: Vec::new(),
            shopping_list: ShoppingList::default(),
            total_cost: 90.0,
        };
        assert!((trip.per_scout_cost() - 9.0).abs() < 0.001);
        assert!((trip.per_scout_per_day_cost() - 3.0).abs() < 0.001);
        assert_eq!(
            trip.date_of_day(3),
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
        );
    }
}
