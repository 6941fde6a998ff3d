use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GrubError;

/// Meal category a recipe belongs to. Cracker barrel slots draw from `Snack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Dessert,
}

impl MealCategory {
    /// All categories, in catalog display order.
    pub fn all() -> [MealCategory; 5] {
        [
            MealCategory::Breakfast,
            MealCategory::Lunch,
            MealCategory::Dinner,
            MealCategory::Snack,
            MealCategory::Dessert,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "breakfast",
            MealCategory::Lunch => "lunch",
            MealCategory::Dinner => "dinner",
            MealCategory::Snack => "snack",
            MealCategory::Dessert => "dessert",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealCategory {
    type Err = GrubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealCategory::Breakfast),
            "lunch" => Ok(MealCategory::Lunch),
            "dinner" => Ok(MealCategory::Dinner),
            "snack" => Ok(MealCategory::Snack),
            "dessert" => Ok(MealCategory::Dessert),
            other => Err(GrubError::InvalidInput(format!(
                "unknown category '{other}'"
            ))),
        }
    }
}

/// One line of a recipe: a named quantity and its cost at the recipe's
/// base serving count. Quantity and cost scale together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,

    pub quantity: f64,

    pub unit: String,

    pub cost: f64,
}

impl Ingredient {
    pub fn new(name: &str, quantity: f64, unit: &str, cost: f64) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            cost,
        }
    }
}

/// A catalog recipe sized for a base number of servings.
///
/// Recipes are immutable once created; planning scales copies of their
/// ingredient lists rather than touching the original.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,

    pub name: String,

    pub category: MealCategory,

    pub servings: u32,

    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub instructions: Option<String>,

    #[serde(default)]
    pub prep_time: Option<String>,
}

impl Recipe {
    /// Total cost of the ingredient list at base servings.
    #[inline]
    pub fn total_cost(&self) -> f64 {
        self.ingredients.iter().map(|i| i.cost).sum()
    }

    /// Cost per serving at base servings.
    #[inline]
    pub fn cost_per_serving(&self) -> f64 {
        if self.servings > 0 {
            self.total_cost() / self.servings as f64
        } else {
            0.0
        }
    }

    /// Instruction steps with any leading "1." style numbering stripped.
    pub fn steps(&self) -> Vec<String> {
        let Some(text) = &self.instructions else {
            return Vec::new();
        };
        text.lines()
            .map(|line| {
                let line = line.trim();
                match line.split_once('.') {
                    Some((n, rest)) if n.chars().all(|c| c.is_ascii_digit()) && !n.is_empty() => {
                        rest.trim().to_string()
                    }
                    _ => line.to_string(),
                }
            })
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Case-insensitive match against the recipe name or any ingredient name.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&q)
            || self
                .ingredients
                .iter()
                .any(|i| i.name.to_lowercase().contains(&q))
    }

    /// Basic validation: named, positive servings, at least one priced line.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.servings > 0
            && !self.ingredients.is_empty()
            && self
                .ingredients
                .iter()
                .all(|i| !i.name.trim().is_empty() && i.quantity > 0.0 && i.cost >= 0.0)
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Recipe {}
