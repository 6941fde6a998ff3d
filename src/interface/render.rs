use std::path::Path;

use crate::auditor::{AuditReport, Insight};
use crate::error::Result;
use crate::models::{Meal, Receipt, Recipe, Settings, Trip};

/// Display a trip's plan day by day with per-meal cost and prep time.
pub fn display_meal_plan(trip: &Trip) {
    println!();
    println!("=== {} ===", trip.trip_name);
    println!(
        "{} scouts | {} days | starting {}",
        trip.num_scouts,
        trip.days,
        trip.start_date.format("%Y-%m-%d")
    );

    // Find max slot name length for alignment
    let slot_width = trip
        .plan
        .iter()
        .flat_map(|d| d.meals.iter())
        .map(|m| m.slot.to_string().len())
        .max()
        .unwrap_or(9);

    for day in &trip.plan {
        println!();
        println!(
            "Day {} - {}",
            day.day,
            trip.date_of_day(day.day).format("%A, %b %-d")
        );

        if day.meals.is_empty() {
            println!("  (no meals scheduled)");
            continue;
        }

        for meal in &day.meals {
            let names = if meal.recipes.is_empty() {
                "(nothing selected)".to_string()
            } else {
                meal.recipe_names().join(", ")
            };

            println!(
                "  {:<width$}  {} | ${:.2} | prep: {}",
                meal.slot.to_string(),
                names,
                meal.cost(),
                meal_prep_text(meal),
                width = slot_width
            );
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Total Estimated Cost: ${:.2}", trip.total_cost);
    println!("Cost per Scout: ${:.2}", trip.per_scout_cost());
    println!(
        "Cost per Scout per Day: ${:.2}",
        trip.per_scout_per_day_cost()
    );
    println!();
}

/// The plain-text shopping list export.
pub fn shopping_list_text(trip: &Trip) -> String {
    let mut text = format!("{} - Shopping List\n", trip.trip_name);
    text.push_str(&format!("Number of Scouts: {}\n", trip.num_scouts));
    text.push_str(&format!("Days: {}\n\n", trip.days));
    text.push_str("SHOPPING LIST:\n");
    text.push_str("=============\n\n");

    for item in trip.shopping_list.items() {
        text.push_str(&format!(
            "{}: {:.1} {} (${:.2})\n",
            item.name, item.quantity, item.unit, item.cost
        ));
    }

    text.push_str("\n=============\n");
    text.push_str(&format!("Total Estimated Cost: ${:.2}\n", trip.total_cost));
    text.push_str(&format!("Cost per Scout: ${:.2}\n", trip.per_scout_cost()));
    text
}

pub fn display_shopping_list(trip: &Trip) {
    println!();
    print!("{}", shopping_list_text(trip));
    println!();
}

/// Write the shopping list to a CSV file (item, quantity, unit, cost).
pub fn write_shopping_csv(trip: &Trip, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["item", "quantity", "unit", "cost"])?;

    for item in trip.shopping_list.items() {
        wtr.write_record([
            item.name.clone(),
            format!("{:.1}", item.quantity),
            item.unit.clone(),
            format!("{:.2}", item.cost),
        ])?;
    }

    wtr.write_record([
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        format!("{:.2}", trip.total_cost),
    ])?;

    wtr.flush()?;
    Ok(())
}

/// Display the planned-vs-actual comparison for a trip.
pub fn display_audit_report(report: &AuditReport) {
    println!();
    println!("=== Budget Audit: {} ===", report.trip_name);
    println!();
    println!("Planned Cost: ${:.2}", report.planned_cost);
    println!("Actual Spent: ${:.2}", report.actual_spent);

    let diff_sign = if report.is_over_budget { "+" } else { "" };
    let pct_sign = if report.percent_difference > 0.0 { "+" } else { "" };
    println!(
        "Difference: {}${:.2} ({}{:.1}%)",
        diff_sign, report.difference, pct_sign, report.percent_difference
    );
    println!("Per Scout (Actual): ${:.2}", report.per_scout_actual);
    println!("Receipts: {}", report.receipts_count);
    println!();
}

pub fn display_insights(insights: &[Insight]) {
    println!("=== Insights ===");

    if insights.is_empty() {
        println!("No insights available.");
        return;
    }

    for insight in insights {
        println!();
        println!("[{}]", insight.kind.label());
        println!("{}", insight.message);
    }
    println!();
}

/// Display a simple list of recipes with their details.
pub fn display_recipes(recipes: &[&Recipe], title: &str) {
    if recipes.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} recipes) ===", title, recipes.len());
    println!();

    for recipe in recipes {
        println!(
            "  {} - {} [{}] | serves {} | ${:.2} (${:.2}/serving)",
            recipe.id,
            recipe.name,
            recipe.category,
            recipe.servings,
            recipe.total_cost(),
            recipe.cost_per_serving()
        );
    }

    println!();
}

pub fn display_recipe_detail(recipe: &Recipe) {
    println!();
    println!("=== {} ===", recipe.name);
    println!(
        "Category: {} | Serves: {} | Prep: {}",
        recipe.category,
        recipe.servings,
        recipe.prep_time.as_deref().unwrap_or("not specified")
    );
    println!();

    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!(
            "  {}: {:.1} {} (${:.2})",
            ingredient.name, ingredient.quantity, ingredient.unit, ingredient.cost
        );
    }

    let steps = recipe.steps();
    if !steps.is_empty() {
        println!();
        println!("Instructions:");
        for (i, step) in steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }
    }

    println!();
    println!(
        "Total Cost: ${:.2} (${:.2} per serving)",
        recipe.total_cost(),
        recipe.cost_per_serving()
    );
    println!();
}

pub fn display_trips(trips: &[Trip]) {
    if trips.is_empty() {
        println!("No saved trips yet.");
        return;
    }

    println!();
    println!("=== Saved Trips ({}) ===", trips.len());
    println!();

    for trip in trips {
        println!(
            "  {} - {} | {} scouts | {} days from {} | ${:.2}",
            trip.id,
            trip.trip_name,
            trip.num_scouts,
            trip.days,
            trip.start_date.format("%Y-%m-%d"),
            trip.total_cost
        );
    }

    println!();
}

pub fn display_receipts(receipts: &[Receipt]) {
    if receipts.is_empty() {
        println!("No receipts recorded.");
        return;
    }

    println!();
    println!("=== Receipts ({}) ===", receipts.len());
    println!();

    for receipt in receipts {
        let notes = receipt
            .notes
            .as_deref()
            .map(|n| format!(" - {}", n))
            .unwrap_or_default();
        println!(
            "  {} | {} | {} | ${:.2}{}",
            receipt.id,
            receipt.date.format("%Y-%m-%d"),
            receipt.store,
            receipt.amount,
            notes
        );
    }

    let total: f64 = receipts.iter().map(|r| r.amount).sum();
    println!();
    println!("Total Spent: ${:.2}", total);
    println!();
}

pub fn display_settings(settings: &Settings) {
    println!();
    println!("=== Settings ===");
    println!("Troop Name: {}", settings.troop_name);
    println!("Default Scouts: {}", settings.default_scouts);
    println!(
        "Target Cost per Scout per Day: ${:.2}",
        settings.target_cost_per_scout_per_day
    );
    println!();
}

/// Parse a free-text prep duration ("20 mins", "1.5 hrs", "1 hr 30 mins")
/// to whole minutes. Text with no recognizable duration gives `None`.
pub fn parse_prep_minutes(prep_time: &str) -> Option<u32> {
    let text = prep_time.to_lowercase();
    let hours = number_before(&text, "hr", true);
    let mins = number_before(&text, "min", false);

    if hours.is_none() && mins.is_none() {
        return None;
    }

    let total = hours.unwrap_or(0.0) * 60.0 + mins.unwrap_or(0.0);
    Some(total.round() as u32)
}

/// First number (optionally separated by whitespace) directly preceding an
/// occurrence of `unit` in `text`.
fn number_before(text: &str, unit: &str, allow_decimal: bool) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut search_from = 0;

    while let Some(pos) = text[search_from..].find(unit) {
        let unit_at = search_from + pos;

        let mut end = unit_at;
        while end > 0 && bytes[end - 1].is_ascii_whitespace() {
            end -= 1;
        }

        let mut start = end;
        while start > 0 {
            let b = bytes[start - 1];
            if b.is_ascii_digit() || (allow_decimal && b == b'.') {
                start -= 1;
            } else {
                break;
            }
        }

        if start < end {
            if let Ok(value) = text[start..end].parse::<f64>() {
                return Some(value);
            }
        }

        search_from = unit_at + unit.len();
    }

    None
}

/// Format whole minutes as "45 mins", "2 hrs", or "1 hr 30 mins".
pub fn format_minutes(total: u32) -> String {
    if total < 60 {
        return format!("{} mins", total);
    }

    let hours = total / 60;
    let minutes = total % 60;
    let hr_unit = if hours == 1 { "hr" } else { "hrs" };

    if minutes == 0 {
        format!("{} {}", hours, hr_unit)
    } else {
        format!("{} {} {} mins", hours, hr_unit, minutes)
    }
}

/// Prep-time range across a meal's selected recipes.
pub fn meal_prep_text(meal: &Meal) -> String {
    let times: Vec<u32> = meal
        .recipes
        .iter()
        .filter_map(|r| r.prep_time.as_deref().and_then(parse_prep_minutes))
        .collect();

    match (times.iter().min(), times.iter().max()) {
        (Some(&min), Some(&max)) if min == max => format_minutes(min),
        (Some(&min), Some(&max)) => {
            format!("{} - {}", format_minutes(min), format_minutes(max))
        }
        _ => "Prep time varies by selection".to_string(),
    }
}
