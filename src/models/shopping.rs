use serde::{Deserialize, Serialize};

use crate::models::recipe::Ingredient;

/// One consolidated shopping line: total quantity and cost for everything
/// purchased under this ingredient name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,

    pub quantity: f64,

    pub unit: String,

    pub cost: f64,
}

/// Consolidated shopping list, in first-encountered ingredient order.
///
/// Merging is by ingredient name only. Quantities and costs add up; the unit
/// is taken from the first occurrence, so two recipes listing "Milk" in
/// different units sum under whichever unit appeared first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scaled ingredient into the list.
    pub fn add(&mut self, ingredient: &Ingredient) {
        match self.items.iter_mut().find(|i| i.name == ingredient.name) {
            Some(item) => {
                item.quantity += ingredient.quantity;
                item.cost += ingredient.cost;
            }
            None => self.items.push(ShoppingItem {
                name: ingredient.name.clone(),
                quantity: ingredient.quantity,
                unit: ingredient.unit.clone(),
                cost: ingredient.cost,
            }),
        }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all consolidated line costs.
    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(|i| i.cost).sum()
    }

    pub fn per_scout_cost(&self, num_scouts: u32) -> f64 {
        self.total_cost() / num_scouts as f64
    }

    pub fn per_scout_per_day_cost(&self, num_scouts: u32, days: u32) -> f64 {
        self.per_scout_cost(num_scouts) / days.max(1) as f64
    }
}
