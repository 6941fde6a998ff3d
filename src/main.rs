use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use grubmaster_rs::auditor;
use grubmaster_rs::cli::{
    Cli, Command, EditArgs, PlanArgs, ReceiptsAction, RecipesAction, SettingsAction, TripsAction,
};
use grubmaster_rs::error::{GrubError, Result};
use grubmaster_rs::interface::{
    display_audit_report, display_insights, display_meal_plan, display_receipts,
    display_recipe_detail, display_recipes, display_settings, display_shopping_list,
    display_trips, prompt_date, prompt_receipt, prompt_recipe_entry, prompt_scouts,
    prompt_trip_name, prompt_yes_no, resolve_recipe, shopping_list_text, write_shopping_csv,
};
use grubmaster_rs::models::{MealSlot, Recipe, Trip};
use grubmaster_rs::planner::{
    RecipeCatalog, aggregate, generate_plan, meal_with_recipe, meal_without_recipe,
    refresh_totals, rescale_trip, trip_day_count,
};
use grubmaster_rs::state::{RecordStore, load_store, save_store};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&cli.file, args),
        Command::Trips { action } => match action.unwrap_or_default() {
            TripsAction::List => cmd_trips_list(&cli.file),
            TripsAction::Show { trip } => cmd_trips_show(&cli.file, &trip),
            TripsAction::Delete { trip } => cmd_trips_delete(&cli.file, &trip),
            TripsAction::Edit(args) => cmd_trips_edit(&cli.file, args),
        },
        Command::Recipes {
            category,
            search,
            action,
        } => match action {
            Some(RecipesAction::Show { recipe }) => cmd_recipes_show(&cli.file, &recipe),
            Some(RecipesAction::Add) => cmd_recipes_add(&cli.file),
            None => cmd_recipes_list(&cli.file, category.as_deref(), search.as_deref()),
        },
        Command::Audit { trip } => cmd_audit(&cli.file, &trip),
        Command::Receipts { trip, action } => match action.unwrap_or_default() {
            ReceiptsAction::List => cmd_receipts_list(&cli.file, &trip),
            ReceiptsAction::Add => cmd_receipts_add(&cli.file, &trip),
            ReceiptsAction::Delete { receipt } => cmd_receipts_delete(&cli.file, &trip, &receipt),
        },
        Command::Settings { action } => match action.unwrap_or_default() {
            SettingsAction::Show => cmd_settings_show(&cli.file),
            SettingsAction::Set {
                troop_name,
                scouts,
                target,
            } => cmd_settings_set(&cli.file, troop_name, scouts, target),
        },
    }
}

fn parse_or_prompt_date(raw: Option<&str>, label: &str) -> Result<NaiveDate> {
    match raw {
        Some(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map_err(|_| GrubError::InvalidInput("Invalid date (expected YYYY-MM-DD)".to_string())),
        None => prompt_date(label),
    }
}

/// Generate a plan from trip parameters, prompting for anything omitted.
fn cmd_plan(file_path: &str, args: PlanArgs) -> Result<()> {
    let mut store = RecordStore::new(load_store(file_path)?);

    let trip_name = match args.name {
        Some(name) => name,
        None => prompt_trip_name()?,
    };

    let num_scouts = match args.scouts {
        Some(scouts) => scouts,
        None => prompt_scouts(store.settings().default_scouts)?,
    };

    let start_date = parse_or_prompt_date(args.start.as_deref(), "Start date (YYYY-MM-DD)")?;
    let end_date = parse_or_prompt_date(args.end.as_deref(), "End date (YYYY-MM-DD)")?;
    let days = trip_day_count(start_date, end_date)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let catalog = RecipeCatalog::new(store.recipes());
    println!(
        "Planning {} days for {} scouts from {} recipes...",
        days,
        num_scouts,
        catalog.len()
    );

    let plan = generate_plan(&catalog, days, num_scouts, args.meals_per_day, &mut rng)?;
    let shopping_list = aggregate(&plan);
    let total_cost = shopping_list.total_cost();

    let trip = Trip {
        id: String::new(),
        trip_name,
        num_scouts,
        days,
        start_date,
        plan,
        shopping_list,
        total_cost,
    };

    display_meal_plan(&trip);
    display_shopping_list(&trip);

    if let Some(path) = &args.export {
        fs::write(path, shopping_list_text(&trip))?;
        println!("Shopping list written to {}", path);
    }

    if let Some(path) = &args.csv {
        write_shopping_csv(&trip, Path::new(path))?;
        println!("Shopping list written to {}", path);
    }

    if prompt_yes_no("Save this trip?", true)? {
        let id = store.save_trip(trip);
        save_store(file_path, store.data())?;
        println!("Saved as {}.", id);
    }

    Ok(())
}

fn cmd_trips_list(file_path: &str) -> Result<()> {
    let store = RecordStore::new(load_store(file_path)?);
    display_trips(store.trips());
    Ok(())
}

fn cmd_trips_show(file_path: &str, trip_id: &str) -> Result<()> {
    let store = RecordStore::new(load_store(file_path)?);
    let trip = store.get_trip(trip_id)?;
    display_meal_plan(trip);
    display_shopping_list(trip);
    Ok(())
}

fn cmd_trips_delete(file_path: &str, trip_id: &str) -> Result<()> {
    let mut store = RecordStore::new(load_store(file_path)?);
    let name = store.get_trip(trip_id)?.trip_name.clone();

    if !prompt_yes_no(&format!("Delete '{}' and its receipts?", name), false)? {
        println!("Nothing deleted.");
        return Ok(());
    }

    store.delete_trip(trip_id)?;
    save_store(file_path, store.data())?;
    println!("Deleted {}.", trip_id);
    Ok(())
}

/// Edit a saved trip: rescale the roster or swap recipes on one meal.
fn cmd_trips_edit(file_path: &str, args: EditArgs) -> Result<()> {
    let mut store = RecordStore::new(load_store(file_path)?);
    let mut trip = store.get_trip(&args.trip)?.clone();

    if args.scouts.is_none() && args.add.is_none() && args.remove.is_none() {
        return Err(GrubError::InvalidInput(
            "Nothing to edit: pass --scouts, or --day/--slot with --add/--remove".to_string(),
        ));
    }

    if let Some(num_scouts) = args.scouts {
        trip = rescale_trip(&trip, num_scouts)?;
        println!("Rescaled to {} scouts.", num_scouts);
    }

    if args.add.is_some() || args.remove.is_some() {
        let (day, slot) = match (args.day, args.slot.as_deref()) {
            (Some(day), Some(slot)) => (day, slot.parse::<MealSlot>()?),
            _ => {
                return Err(GrubError::InvalidInput(
                    "--day and --slot are required to edit a meal".to_string(),
                ));
            }
        };

        let day_index = trip
            .plan
            .iter()
            .position(|d| d.day == day)
            .ok_or_else(|| {
                GrubError::InvalidInput(format!("Day {} is not part of this trip", day))
            })?;
        let meal_index = trip.plan[day_index]
            .meals
            .iter()
            .position(|m| m.slot == slot)
            .ok_or_else(|| GrubError::InvalidInput(format!("Day {} has no {} meal", day, slot)))?;

        if let Some(query) = &args.add {
            let candidates: Vec<&Recipe> = store
                .recipes()
                .iter()
                .filter(|r| r.category == slot.category())
                .collect();

            match resolve_recipe(&candidates, query)? {
                Some(recipe) => {
                    let meal = &trip.plan[day_index].meals[meal_index];
                    let updated = meal_with_recipe(meal, recipe, trip.num_scouts)?;
                    println!("Added {} to day {} {}.", recipe.name, day, slot);
                    trip.plan[day_index].meals[meal_index] = updated;
                }
                None => println!("No recipe added."),
            }
        }

        if let Some(query) = &args.remove {
            let meal = trip.plan[day_index].meals[meal_index].clone();
            let candidates: Vec<&Recipe> = meal.recipes.iter().collect();

            match resolve_recipe(&candidates, query)? {
                Some(recipe) => {
                    let updated = meal_without_recipe(&meal, &recipe.id, trip.num_scouts)?;
                    println!("Removed {} from day {} {}.", recipe.name, day, slot);
                    trip.plan[day_index].meals[meal_index] = updated;
                }
                None => println!("No recipe removed."),
            }
        }
    }

    refresh_totals(&mut trip);
    display_meal_plan(&trip);
    display_shopping_list(&trip);

    store.replace_trip(trip)?;
    save_store(file_path, store.data())?;
    println!("Trip updated.");
    Ok(())
}

fn cmd_recipes_list(
    file_path: &str,
    category: Option<&str>,
    search: Option<&str>,
) -> Result<()> {
    let store = RecordStore::new(load_store(file_path)?);
    let catalog = RecipeCatalog::new(store.recipes());

    let mut selected: Vec<&Recipe> = match category {
        Some(raw) => catalog.by_category(raw.parse()?),
        None => catalog.all().iter().collect(),
    };
    if let Some(query) = search {
        selected.retain(|r| r.matches_query(query));
    }

    let title = match (category, search) {
        (Some(c), Some(q)) => format!("{} recipes matching '{}'", c, q),
        (Some(c), None) => format!("{} recipes", c),
        (None, Some(q)) => format!("Recipes matching '{}'", q),
        (None, None) => "Recipe Catalog".to_string(),
    };

    display_recipes(&selected, &title);
    Ok(())
}

fn cmd_recipes_show(file_path: &str, query: &str) -> Result<()> {
    let store = RecordStore::new(load_store(file_path)?);

    // Exact id first, then fuzzy by name
    if let Ok(recipe) = store.get_recipe(query) {
        display_recipe_detail(recipe);
        return Ok(());
    }

    let candidates: Vec<&Recipe> = store.recipes().iter().collect();
    match resolve_recipe(&candidates, query)? {
        Some(recipe) => {
            display_recipe_detail(recipe);
            Ok(())
        }
        None => Err(GrubError::RecipeNotFound(query.to_string())),
    }
}

fn cmd_recipes_add(file_path: &str) -> Result<()> {
    let mut store = RecordStore::new(load_store(file_path)?);

    let recipe = prompt_recipe_entry()?;
    let name = recipe.name.clone();
    let id = store.add_recipe(recipe)?;
    save_store(file_path, store.data())?;
    println!("Added '{}' as {}.", name, id);
    Ok(())
}

/// Cost comparison and insights for one trip.
fn cmd_audit(file_path: &str, trip_id: &str) -> Result<()> {
    let store = RecordStore::new(load_store(file_path)?);
    let trip = store.get_trip(trip_id)?;
    let receipts = store.receipts(trip_id);

    let report = auditor::report(trip, receipts);
    display_audit_report(&report);

    let target = store.settings().target_cost_per_scout_per_day;
    let insights = auditor::insights(trip, receipts, target);
    display_insights(&insights);
    Ok(())
}

fn cmd_receipts_list(file_path: &str, trip_id: &str) -> Result<()> {
    let store = RecordStore::new(load_store(file_path)?);
    let trip = store.get_trip(trip_id)?;

    println!("Receipts for '{}':", trip.trip_name);
    display_receipts(store.receipts(trip_id));
    Ok(())
}

fn cmd_receipts_add(file_path: &str, trip_id: &str) -> Result<()> {
    let mut store = RecordStore::new(load_store(file_path)?);
    let trip = store.get_trip(trip_id)?.clone();

    let receipt = prompt_receipt(&trip)?;
    let id = store.add_receipt(trip_id, receipt)?;
    save_store(file_path, store.data())?;
    println!("Recorded {}.", id);

    display_receipts(store.receipts(trip_id));
    Ok(())
}

fn cmd_receipts_delete(file_path: &str, trip_id: &str, receipt_id: &str) -> Result<()> {
    let mut store = RecordStore::new(load_store(file_path)?);

    if !prompt_yes_no(&format!("Delete {}?", receipt_id), false)? {
        println!("Nothing deleted.");
        return Ok(());
    }

    store.delete_receipt(trip_id, receipt_id)?;
    save_store(file_path, store.data())?;
    println!("Deleted {}.", receipt_id);
    Ok(())
}

fn cmd_settings_show(file_path: &str) -> Result<()> {
    let store = RecordStore::new(load_store(file_path)?);
    display_settings(store.settings());
    Ok(())
}

fn cmd_settings_set(
    file_path: &str,
    troop_name: Option<String>,
    scouts: Option<u32>,
    target: Option<f64>,
) -> Result<()> {
    if troop_name.is_none() && scouts.is_none() && target.is_none() {
        println!("Please specify at least one option:");
        println!("  --troop-name  Troop display name");
        println!("  --scouts      Default roster size for new plans");
        println!("  --target      Target cost per scout per day, in dollars");
        return Ok(());
    }

    let mut store = RecordStore::new(load_store(file_path)?);
    let mut settings = store.settings().clone();

    if let Some(name) = troop_name {
        settings.troop_name = name;
    }
    if let Some(scouts) = scouts {
        settings.default_scouts = scouts;
    }
    if let Some(target) = target {
        settings.target_cost_per_scout_per_day = target;
    }

    store.update_settings(settings);
    save_store(file_path, store.data())?;
    display_settings(store.settings());
    Ok(())
}
