use thiserror::Error;

use crate::models::MealCategory;

#[derive(Debug, Error)]
pub enum GrubError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Trip not found: {0}")]
    TripNotFound(String),

    #[error("Receipt not found: {0}")]
    ReceiptNotFound(String),

    #[error("Invalid servings: base {base}, target {target}")]
    InvalidServings { base: u32, target: u32 },

    #[error("No {0} recipes available")]
    EmptyCategory(MealCategory),

    #[error("Invalid roster size: {0}")]
    InvalidRoster(u32),

    #[error("Invalid date range: trip must span at least one day")]
    InvalidDateRange,

    #[error("Invalid meals per day: {0} (expected 1 to 4)")]
    InvalidMealsPerDay(u8),

    #[error("Recipe '{recipe}' is not a {expected} recipe")]
    CategoryMismatch {
        recipe: String,
        expected: MealCategory,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, GrubError>;
