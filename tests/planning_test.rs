use assert_float_eq::assert_float_absolute_eq;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use grubmaster_rs::error::GrubError;
use grubmaster_rs::models::{MealSlot, Trip};
use grubmaster_rs::planner::{
    RecipeCatalog, aggregate, generate_plan, meal_with_recipe, meal_without_recipe, rescale_trip,
    scale_recipe, trip_day_count,
};
use grubmaster_rs::state::starter_recipes;

fn planned_trip(scouts: u32, days: u32, seed: u64) -> Trip {
    let recipes = starter_recipes();
    let catalog = RecipeCatalog::new(&recipes);
    let mut rng = StdRng::seed_from_u64(seed);

    let plan = generate_plan(&catalog, days, scouts, 3, &mut rng).unwrap();
    let shopping_list = aggregate(&plan);
    let total_cost = shopping_list.total_cost();

    Trip {
        id: "trip_1".to_string(),
        trip_name: "Summer Camp".to_string(),
        num_scouts: scouts,
        days,
        start_date: NaiveDate::from_ymd_opt(2025, 6, 13).unwrap(),
        plan,
        shopping_list,
        total_cost,
    }
}

#[test]
fn test_three_day_trip_shape() {
    let trip = planned_trip(10, 3, 7);

    assert_eq!(trip.plan.len(), 3);

    // Arrival day has no meals at 3 meals/day
    assert!(trip.plan[0].meals.is_empty(), "Day 1 should have no meals");

    // Middle day gets breakfast, lunch, dinner in order
    let slots: Vec<MealSlot> = trip.plan[1].meals.iter().map(|m| m.slot).collect();
    assert_eq!(
        slots,
        vec![MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner]
    );

    // Departure day is breakfast only
    let slots: Vec<MealSlot> = trip.plan[2].meals.iter().map(|m| m.slot).collect();
    assert_eq!(slots, vec![MealSlot::Breakfast]);
}

#[test]
fn test_cracker_barrel_only_at_four_meals_on_arrival() {
    let recipes = starter_recipes();
    let catalog = RecipeCatalog::new(&recipes);
    let mut rng = StdRng::seed_from_u64(11);

    let plan = generate_plan(&catalog, 3, 8, 4, &mut rng).unwrap();

    let slots: Vec<MealSlot> = plan[0].meals.iter().map(|m| m.slot).collect();
    assert_eq!(slots, vec![MealSlot::CrackerBarrel]);

    // No cracker barrel anywhere else
    for day in &plan[1..] {
        assert!(
            day.meals.iter().all(|m| m.slot != MealSlot::CrackerBarrel),
            "Cracker barrel appeared after day 1"
        );
    }
}

#[test]
fn test_one_meal_per_day_plans_empty_days() {
    let recipes = starter_recipes();
    let catalog = RecipeCatalog::new(&recipes);
    let mut rng = StdRng::seed_from_u64(3);

    let plan = generate_plan(&catalog, 4, 8, 1, &mut rng).unwrap();

    assert_eq!(plan.len(), 4);
    for day in &plan {
        assert!(day.meals.is_empty(), "Day {} should be empty", day.day);
    }
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let first = planned_trip(10, 4, 42);
    let second = planned_trip(10, 4, 42);

    assert_eq!(first.plan, second.plan);
    assert!((first.total_cost - second.total_cost).abs() < 1e-9);
}

#[test]
fn test_scaling_scenario() {
    let recipes = starter_recipes();
    let eggs = recipes
        .iter()
        .find(|r| r.name == "Scrambled Eggs & Bacon")
        .unwrap();

    assert_eq!(eggs.servings, 10);
    assert_float_absolute_eq!(eggs.total_cost(), 22.5, 0.001);

    // Same roster as base yield: unchanged
    let same = scale_recipe(eggs, 10).unwrap();
    let same_cost: f64 = same.iter().map(|i| i.cost).sum();
    assert_float_absolute_eq!(same_cost, 22.5, 0.001);

    // Doubled roster: cost and quantities double
    let doubled = scale_recipe(eggs, 20).unwrap();
    let doubled_cost: f64 = doubled.iter().map(|i| i.cost).sum();
    assert_float_absolute_eq!(doubled_cost, 45.0, 0.001);

    for (base, scaled) in eggs.ingredients.iter().zip(&doubled) {
        assert!(
            (scaled.quantity - base.quantity * 2.0).abs() < 1e-9,
            "{} quantity did not double",
            base.name
        );
    }
}

#[test]
fn test_aggregate_total_matches_meal_costs() {
    let trip = planned_trip(12, 5, 99);

    let meal_total: f64 = trip
        .plan
        .iter()
        .flat_map(|d| d.meals.iter())
        .map(|m| m.cost())
        .sum();

    assert_float_absolute_eq!(trip.shopping_list.total_cost(), meal_total, 1e-6);
    assert_float_absolute_eq!(trip.total_cost, meal_total, 1e-6);
}

#[test]
fn test_trip_day_count_spans() {
    let d = |day| NaiveDate::from_ymd_opt(2025, 6, day).unwrap();

    // Same-day and one-night trips
    assert_eq!(trip_day_count(d(13), d(13)).unwrap(), 1);
    assert_eq!(trip_day_count(d(13), d(14)).unwrap(), 2);
    assert_eq!(trip_day_count(d(13), d(15)).unwrap(), 3);

    // End before start
    assert!(matches!(
        trip_day_count(d(13), d(11)),
        Err(GrubError::InvalidDateRange)
    ));
}

#[test]
fn test_meal_editing_recomputes_costs() {
    let mut trip = planned_trip(10, 3, 21);
    let meal = trip.plan[1].meals[2].clone();
    assert_eq!(meal.slot, MealSlot::Dinner);

    let recipes = starter_recipes();
    let extra = recipes
        .iter()
        .find(|r| r.category == grubmaster_rs::MealCategory::Dinner && !meal.has_recipe(&r.id))
        .unwrap();
    let extra_cost: f64 = scale_recipe(extra, 10).unwrap().iter().map(|i| i.cost).sum();

    let grown = meal_with_recipe(&meal, extra, trip.num_scouts).unwrap();
    assert_float_absolute_eq!(grown.cost(), meal.cost() + extra_cost, 1e-6);

    // Removing it again restores the original cost
    let shrunk = meal_without_recipe(&grown, &extra.id, trip.num_scouts).unwrap();
    assert_float_absolute_eq!(shrunk.cost(), meal.cost(), 1e-6);

    // Wrong-category additions are rejected
    let breakfast = recipes
        .iter()
        .find(|r| r.category == grubmaster_rs::MealCategory::Breakfast)
        .unwrap();
    assert!(matches!(
        meal_with_recipe(&meal, breakfast, trip.num_scouts),
        Err(GrubError::CategoryMismatch { .. })
    ));

    // Putting the edited meal back updates trip totals
    let before = trip.total_cost;
    trip.plan[1].meals[2] = grown;
    grubmaster_rs::planner::refresh_totals(&mut trip);
    assert_float_absolute_eq!(trip.total_cost, before + extra_cost, 1e-6);
}

#[test]
fn test_rescale_trip_doubles_budget() {
    let trip = planned_trip(10, 3, 5);
    let doubled = rescale_trip(&trip, 20).unwrap();

    assert_eq!(doubled.num_scouts, 20);
    assert_float_absolute_eq!(doubled.total_cost, trip.total_cost * 2.0, 1e-6);

    assert!(matches!(
        rescale_trip(&trip, 0),
        Err(GrubError::InvalidRoster(0))
    ));
}
