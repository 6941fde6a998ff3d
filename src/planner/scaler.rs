use crate::error::{GrubError, Result};
use crate::models::{Ingredient, Recipe};

/// Scale a recipe's ingredient list to a target serving count.
///
/// Quantity and cost scale together by `target / base`; the recipe itself
/// is never touched. No rounding happens here, formatting is left to the
/// presentation layer.
pub fn scale_recipe(recipe: &Recipe, target_servings: u32) -> Result<Vec<Ingredient>> {
    if recipe.servings == 0 || target_servings == 0 {
        return Err(GrubError::InvalidServings {
            base: recipe.servings,
            target: target_servings,
        });
    }

    let factor = target_servings as f64 / recipe.servings as f64;
    Ok(recipe
        .ingredients
        .iter()
        .map(|ing| Ingredient {
            name: ing.name.clone(),
            quantity: ing.quantity * factor,
            unit: ing.unit.clone(),
            cost: ing.cost * factor,
        })
        .collect())
}

/// Scale each selected recipe independently and concatenate the results.
///
/// Costs stay additive across recipes sharing a meal; nothing is
/// re-normalized when a meal holds more than one selection.
pub fn scale_selection(recipes: &[Recipe], target_servings: u32) -> Result<Vec<Ingredient>> {
    let mut scaled = Vec::new();
    for recipe in recipes {
        scaled.extend(scale_recipe(recipe, target_servings)?);
    }
    Ok(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealCategory;

    fn eggs_and_bacon() -> Recipe {
        Recipe {
            id: "r1".to_string(),
            name: "Scrambled Eggs & Bacon".to_string(),
            category: MealCategory::Breakfast,
            servings: 10,
            ingredients: vec![
                Ingredient::new("Eggs", 20.0, "eggs", 6.0),
                Ingredient::new("Bacon", 2.0, "lbs", 12.0),
                Ingredient::new("Butter", 0.25, "lb", 1.5),
                Ingredient::new("Toast bread", 20.0, "slices", 3.0),
            ],
            instructions: None,
            prep_time: Some("30 mins".to_string()),
        }
    }

    fn total_cost(ingredients: &[Ingredient]) -> f64 {
        ingredients.iter().map(|i| i.cost).sum()
    }

    #[test]
    fn test_identity_at_base_servings() {
        let recipe = eggs_and_bacon();
        let scaled = scale_recipe(&recipe, 10).unwrap();

        assert_eq!(scaled.len(), 4);
        assert!((total_cost(&scaled) - 22.5).abs() < 0.001);
        assert!((scaled[0].quantity - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_doubling_doubles_quantity_and_cost() {
        let recipe = eggs_and_bacon();
        let scaled = scale_recipe(&recipe, 20).unwrap();

        assert!((total_cost(&scaled) - 45.0).abs() < 0.001);
        assert!((scaled[0].quantity - 40.0).abs() < 0.001);
        assert!((scaled[2].quantity - 0.5).abs() < 0.001);
        assert_eq!(scaled[1].unit, "lbs");
    }

    #[test]
    fn test_fractional_factor() {
        let recipe = eggs_and_bacon();
        let scaled = scale_recipe(&recipe, 5).unwrap();

        assert!((total_cost(&scaled) - 11.25).abs() < 0.001);
        assert!((scaled[3].quantity - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_source_recipe_untouched() {
        let recipe = eggs_and_bacon();
        let _ = scale_recipe(&recipe, 30).unwrap();
        assert!((recipe.ingredients[0].quantity - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_invalid_servings() {
        let recipe = eggs_and_bacon();
        assert!(matches!(
            scale_recipe(&recipe, 0),
            Err(GrubError::InvalidServings { base: 10, target: 0 })
        ));

        let mut zero_base = eggs_and_bacon();
        zero_base.servings = 0;
        assert!(matches!(
            scale_recipe(&zero_base, 10),
            Err(GrubError::InvalidServings { base: 0, target: 10 })
        ));
    }

    #[test]
    fn test_selection_concatenates() {
        let recipe = eggs_and_bacon();
        let mut pancakes = eggs_and_bacon();
        pancakes.id = "r5".to_string();
        pancakes.name = "Pancakes".to_string();
        pancakes.ingredients = vec![Ingredient::new("Pancake mix", 4.0, "cups", 2.5)];

        let scaled = scale_selection(&[recipe, pancakes], 20).unwrap();
        assert_eq!(scaled.len(), 5);
        assert!((total_cost(&scaled) - 50.0).abs() < 0.001);
    }
}
