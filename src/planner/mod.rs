pub mod catalog;
pub mod editing;
pub mod generator;
pub mod scaler;
pub mod shopping;

pub use catalog::RecipeCatalog;
pub use editing::{meal_with_recipe, meal_without_recipe, refresh_totals, rescale_trip};
pub use generator::{generate_plan, slots_for_day, trip_day_count};
pub use scaler::{scale_recipe, scale_selection};
pub use shopping::aggregate;
