use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{GrubError, Result};
use crate::models::{Ingredient, MealCategory, Receipt, Recipe, Trip};

/// Prompt for a trip name.
pub fn prompt_trip_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Trip name")
        .interact_text()?;

    let name = input.trim().to_string();
    if name.is_empty() {
        return Err(GrubError::InvalidInput(
            "Trip name cannot be empty".to_string(),
        ));
    }
    Ok(name)
}

/// Prompt for a calendar date in YYYY-MM-DD form.
pub fn prompt_date(label: &str) -> Result<NaiveDate> {
    let input: String = Input::new().with_prompt(label).interact_text()?;

    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| GrubError::InvalidInput("Invalid date (expected YYYY-MM-DD)".to_string()))
}

/// Prompt for the roster size.
pub fn prompt_scouts(default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Number of scouts")
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| GrubError::InvalidInput("Invalid number".to_string()))
}

/// Resolve a typed recipe name against the candidates with fuzzy matching.
///
/// Exact case-insensitive match wins outright. Otherwise the closest
/// jaro-winkler matches above 0.7 are offered for confirmation or
/// selection. `Ok(None)` means nothing matched or the user declined.
pub fn resolve_recipe<'a>(candidates: &[&'a Recipe], query: &str) -> Result<Option<&'a Recipe>> {
    let query = query.trim();

    // Try exact match first (case-insensitive)
    let exact_match = candidates
        .iter()
        .find(|r| r.name.to_lowercase() == query.to_lowercase())
        .copied();

    if let Some(recipe) = exact_match {
        return Ok(Some(recipe));
    }

    // Try fuzzy matching
    let mut scored: Vec<(&Recipe, f64)> = candidates
        .iter()
        .map(|r| (*r, jaro_winkler(&r.name.to_lowercase(), &query.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if scored.is_empty() {
        println!("No matching recipe found for '{}'", query);
        return Ok(None);
    }

    if scored.len() == 1 {
        let recipe = scored[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", recipe.name))
            .default(true)
            .interact()?;

        return Ok(if confirm { Some(recipe) } else { None });
    }

    // Multiple matches - let user select
    let top: Vec<&Recipe> = scored.iter().take(5).map(|(r, _)| *r).collect();
    let mut options: Vec<String> = top.iter().map(|r| r.name.clone()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(top.get(selection).copied())
}

/// Interactive entry of a custom recipe: name, category, base servings,
/// then an ingredient loop until a blank name is entered.
pub fn prompt_recipe_entry() -> Result<Recipe> {
    let name: String = Input::new().with_prompt("Recipe name").interact_text()?;
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(GrubError::InvalidInput(
            "Recipe name cannot be empty".to_string(),
        ));
    }

    let categories = MealCategory::all();
    let labels: Vec<String> = categories.iter().map(|c| c.to_string()).collect();
    let selection = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()?;
    let category = categories[selection];

    let servings_input: String = Input::new()
        .with_prompt("Base servings")
        .default("10".to_string())
        .interact_text()?;
    let servings: u32 = servings_input
        .trim()
        .parse()
        .map_err(|_| GrubError::InvalidInput("Invalid number".to_string()))?;
    if servings == 0 {
        return Err(GrubError::InvalidInput(
            "Servings must be at least 1".to_string(),
        ));
    }

    let mut ingredients = Vec::new();
    loop {
        let ing_name: String = Input::new()
            .with_prompt("Ingredient name (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let ing_name = ing_name.trim();
        if ing_name.is_empty() {
            break;
        }

        let quantity_input: String = Input::new().with_prompt("Quantity").interact_text()?;
        let quantity: f64 = quantity_input
            .trim()
            .parse()
            .map_err(|_| GrubError::InvalidInput("Invalid number".to_string()))?;

        let unit: String = Input::new()
            .with_prompt("Unit (lbs, count, bottles, ...)")
            .interact_text()?;

        let cost_input: String = Input::new()
            .with_prompt(format!("Cost for {} servings ($)", servings))
            .interact_text()?;
        let cost: f64 = cost_input
            .trim()
            .parse()
            .map_err(|_| GrubError::InvalidInput("Invalid number".to_string()))?;

        ingredients.push(Ingredient::new(ing_name, quantity, unit.trim(), cost));
        println!("Added: {}", ing_name);
    }

    if ingredients.is_empty() {
        return Err(GrubError::InvalidInput(
            "A recipe needs at least one ingredient".to_string(),
        ));
    }

    let instructions_input: String = Input::new()
        .with_prompt("Instructions (optional, separate steps with ';')")
        .allow_empty(true)
        .interact_text()?;
    let instructions = if instructions_input.trim().is_empty() {
        None
    } else {
        Some(
            instructions_input
                .split(';')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    };

    let prep_input: String = Input::new()
        .with_prompt("Prep time (optional, e.g. 20 mins or 1 hr)")
        .allow_empty(true)
        .interact_text()?;
    let prep_time = if prep_input.trim().is_empty() {
        None
    } else {
        Some(prep_input.trim().to_string())
    };

    Ok(Recipe {
        id: String::new(),
        name,
        category,
        servings,
        ingredients,
        instructions,
        prep_time,
    })
}

/// Interactive entry of a receipt against a trip. Purchase dates after
/// the trip start are rejected.
pub fn prompt_receipt(trip: &Trip) -> Result<Receipt> {
    let store: String = Input::new().with_prompt("Store name").interact_text()?;
    let store = store.trim().to_string();
    if store.is_empty() {
        return Err(GrubError::InvalidInput(
            "Store name cannot be empty".to_string(),
        ));
    }

    let date = prompt_date("Purchase date (YYYY-MM-DD)")?;
    if date > trip.start_date {
        return Err(GrubError::InvalidInput(
            "Purchase date must be on or before the trip start date.".to_string(),
        ));
    }

    let amount_input: String = Input::new()
        .with_prompt("Amount spent ($)")
        .interact_text()?;
    let amount: f64 = amount_input
        .trim()
        .parse()
        .map_err(|_| GrubError::InvalidInput("Invalid number".to_string()))?;
    if amount < 0.0 {
        return Err(GrubError::InvalidInput(
            "Amount must be zero or more".to_string(),
        ));
    }

    let notes_input: String = Input::new()
        .with_prompt("Notes (optional)")
        .allow_empty(true)
        .interact_text()?;
    let notes = if notes_input.trim().is_empty() {
        None
    } else {
        Some(notes_input.trim().to_string())
    };

    Ok(Receipt::new(&store, date, amount, notes))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
