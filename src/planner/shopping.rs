use crate::models::{MealPlan, ShoppingList};

/// Consolidate every scaled ingredient in a plan into one shopping list.
///
/// Walks days and meals in plan order so the list comes out in
/// first-encountered ingredient order. The list total equals the sum of
/// all meal costs: every line is counted once, nothing is dropped.
pub fn aggregate(plan: &MealPlan) -> ShoppingList {
    let mut list = ShoppingList::new();
    for day in plan {
        for meal in &day.meals {
            for ingredient in &meal.scaled_ingredients {
                list.add(ingredient);
            }
        }
    }
    list
}
