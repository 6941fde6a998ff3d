use crate::models::{MealCategory, Recipe};

/// Read-only lookup and filtering over a set of recipes.
///
/// Borrows the caller's recipe slice; planning clones individual recipes
/// into meals as they are selected.
pub struct RecipeCatalog<'a> {
    recipes: &'a [Recipe],
}

impl<'a> RecipeCatalog<'a> {
    pub fn new(recipes: &'a [Recipe]) -> Self {
        Self { recipes }
    }

    pub fn all(&self) -> &'a [Recipe] {
        self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&'a Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Recipes in one category. An unrepresented category yields an empty
    /// list, not an error.
    pub fn by_category(&self, category: MealCategory) -> Vec<&'a Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// Case-insensitive substring search across recipe names and ingredient
    /// names. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&'a Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.matches_query(query))
            .collect()
    }

    /// Distinct categories present, in display order.
    pub fn categories(&self) -> Vec<MealCategory> {
        MealCategory::all()
            .into_iter()
            .filter(|c| self.recipes.iter().any(|r| r.category == *c))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
