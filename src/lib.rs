pub mod auditor;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{GrubError, Result};
pub use models::{Ingredient, MealCategory, Recipe, Trip};
