use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{GrubError, Result};
use crate::models::{Receipt, Recipe, Settings, Trip};
use crate::state::defaults;

/// Everything the app persists, as a single snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreData {
    pub recipes: Vec<Recipe>,

    pub trips: Vec<Trip>,

    /// Receipts bucketed by trip id.
    pub receipts: HashMap<String, Vec<Receipt>>,

    pub settings: Settings,

    #[serde(default)]
    pub next_trip_id: u64,

    #[serde(default)]
    pub next_receipt_id: u64,

    #[serde(default)]
    pub next_recipe_id: u64,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            recipes: defaults::starter_recipes(),
            trips: Vec::new(),
            receipts: HashMap::new(),
            settings: Settings::default(),
            next_trip_id: 0,
            next_receipt_id: 0,
            next_recipe_id: 0,
        }
    }
}

/// Owning wrapper around the snapshot: lookups, id assignment, and the
/// bucket lifecycle tying receipts to trips.
pub struct RecordStore {
    data: StoreData,
}

impl RecordStore {
    pub fn new(data: StoreData) -> Self {
        Self { data }
    }

    /// Borrow the snapshot for saving.
    pub fn data(&self) -> &StoreData {
        &self.data
    }

    // Recipes

    pub fn recipes(&self) -> &[Recipe] {
        &self.data.recipes
    }

    pub fn get_recipe(&self, id: &str) -> Result<&Recipe> {
        self.data
            .recipes
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| GrubError::RecipeNotFound(id.to_string()))
    }

    /// Add a custom recipe and return its assigned id.
    pub fn add_recipe(&mut self, mut recipe: Recipe) -> Result<String> {
        if !recipe.is_valid() {
            return Err(GrubError::InvalidInput(
                "recipe needs a name, positive servings, and at least one priced ingredient"
                    .to_string(),
            ));
        }

        self.data.next_recipe_id += 1;
        let id = format!("custom_{}", self.data.next_recipe_id);
        recipe.id = id.clone();
        self.data.recipes.push(recipe);
        Ok(id)
    }

    // Trips

    pub fn trips(&self) -> &[Trip] {
        &self.data.trips
    }

    pub fn get_trip(&self, id: &str) -> Result<&Trip> {
        self.data
            .trips
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| GrubError::TripNotFound(id.to_string()))
    }

    /// Save a new trip: assigns its id and opens an empty receipt bucket.
    pub fn save_trip(&mut self, mut trip: Trip) -> String {
        self.data.next_trip_id += 1;
        let id = format!("trip_{}", self.data.next_trip_id);
        trip.id = id.clone();
        self.data.receipts.insert(id.clone(), Vec::new());
        self.data.trips.push(trip);
        id
    }

    /// Replace a stored trip after an edit. The id must already exist.
    pub fn replace_trip(&mut self, trip: Trip) -> Result<()> {
        match self.data.trips.iter_mut().find(|t| t.id == trip.id) {
            Some(slot) => {
                *slot = trip;
                Ok(())
            }
            None => Err(GrubError::TripNotFound(trip.id)),
        }
    }

    /// Delete a trip along with its receipt bucket.
    pub fn delete_trip(&mut self, id: &str) -> Result<()> {
        let before = self.data.trips.len();
        self.data.trips.retain(|t| t.id != id);
        if self.data.trips.len() == before {
            return Err(GrubError::TripNotFound(id.to_string()));
        }
        self.data.receipts.remove(id);
        Ok(())
    }

    // Receipts

    /// Receipts recorded against a trip; empty when none exist.
    pub fn receipts(&self, trip_id: &str) -> &[Receipt] {
        self.data
            .receipts
            .get(trip_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Record a receipt against an existing trip and return its id.
    pub fn add_receipt(&mut self, trip_id: &str, mut receipt: Receipt) -> Result<String> {
        if !self.data.trips.iter().any(|t| t.id == trip_id) {
            return Err(GrubError::TripNotFound(trip_id.to_string()));
        }

        self.data.next_receipt_id += 1;
        let id = format!("receipt_{}", self.data.next_receipt_id);
        receipt.id = id.clone();
        self.data
            .receipts
            .entry(trip_id.to_string())
            .or_default()
            .push(receipt);
        Ok(id)
    }

    pub fn delete_receipt(&mut self, trip_id: &str, receipt_id: &str) -> Result<()> {
        let bucket = self
            .data
            .receipts
            .get_mut(trip_id)
            .ok_or_else(|| GrubError::TripNotFound(trip_id.to_string()))?;

        let before = bucket.len();
        bucket.retain(|r| r.id != receipt_id);
        if bucket.len() == before {
            return Err(GrubError::ReceiptNotFound(receipt_id.to_string()));
        }
        Ok(())
    }

    // Settings

    pub fn settings(&self) -> &Settings {
        &self.data.settings
    }

    pub fn update_settings(&mut self, settings: Settings) {
        self.data.settings = settings;
    }
}
