use crate::error::{GrubError, Result};
use crate::models::{Meal, Recipe, Trip};
use crate::planner::scaler::scale_selection;
use crate::planner::shopping;

/// Add a recipe to a meal's selection, returning the updated meal.
///
/// The recipe must match the slot's category. Re-adding an already
/// selected recipe returns the meal unchanged.
pub fn meal_with_recipe(meal: &Meal, recipe: &Recipe, num_scouts: u32) -> Result<Meal> {
    if recipe.category != meal.slot.category() {
        return Err(GrubError::CategoryMismatch {
            recipe: recipe.name.clone(),
            expected: meal.slot.category(),
        });
    }
    if meal.has_recipe(&recipe.id) {
        return Ok(meal.clone());
    }

    let mut recipes = meal.recipes.clone();
    recipes.push(recipe.clone());
    let scaled = scale_selection(&recipes, num_scouts)?;
    Ok(Meal::new(meal.slot, recipes, scaled))
}

/// Remove a recipe from a meal's selection, returning the updated meal.
///
/// Removing an id that is not selected returns the meal unchanged. The
/// selection may become empty, leaving a zero-cost meal in the slot.
pub fn meal_without_recipe(meal: &Meal, recipe_id: &str, num_scouts: u32) -> Result<Meal> {
    if !meal.has_recipe(recipe_id) {
        return Ok(meal.clone());
    }

    let recipes: Vec<Recipe> = meal
        .recipes
        .iter()
        .filter(|r| r.id != recipe_id)
        .cloned()
        .collect();
    let scaled = scale_selection(&recipes, num_scouts)?;
    Ok(Meal::new(meal.slot, recipes, scaled))
}

/// Recompute a trip's shopping list and total after its plan changed.
pub fn refresh_totals(trip: &mut Trip) {
    trip.shopping_list = shopping::aggregate(&trip.plan);
    trip.total_cost = trip.shopping_list.total_cost();
}

/// Re-scale every meal in a trip to a new roster size and refresh the
/// derived shopping list and total.
pub fn rescale_trip(trip: &Trip, num_scouts: u32) -> Result<Trip> {
    if num_scouts == 0 {
        return Err(GrubError::InvalidRoster(num_scouts));
    }

    let mut rescaled = trip.clone();
    rescaled.num_scouts = num_scouts;
    for day in &mut rescaled.plan {
        for meal in &mut day.meals {
            meal.scaled_ingredients = scale_selection(&meal.recipes, num_scouts)?;
        }
    }
    refresh_totals(&mut rescaled);
    Ok(rescaled)
}
