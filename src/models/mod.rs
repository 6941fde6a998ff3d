pub mod plan;
pub mod receipt;
pub mod recipe;
pub mod settings;
pub mod shopping;

pub use plan::{DayPlan, Meal, MealPlan, MealSlot, Trip};
pub use receipt::Receipt;
pub use recipe::{Ingredient, MealCategory, Recipe};
pub use settings::Settings;
pub use shopping::{ShoppingItem, ShoppingList};
