use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::error::{GrubError, Result};
use crate::models::{DayPlan, Meal, MealPlan, MealSlot};
use crate::planner::catalog::RecipeCatalog;
use crate::planner::scaler::scale_recipe;

/// Slots scheduled for a 1-based trip day.
///
/// Day 1 is the arrival evening: no cooked meals, only a cracker barrel
/// when running four meals a day. The last day is departure: breakfast
/// only. One meal a day schedules nothing at all.
pub fn slots_for_day(day: u32, days: u32, meals_per_day: u8) -> Vec<MealSlot> {
    let mut slots = Vec::new();

    if day != 1 && meals_per_day >= 2 {
        slots.push(MealSlot::Breakfast);
    }
    if day != 1 && meals_per_day > 2 && day != days {
        slots.push(MealSlot::Lunch);
    }
    if day != 1 && meals_per_day >= 2 && day != days {
        slots.push(MealSlot::Dinner);
    }
    if meals_per_day == 4 && day == 1 {
        slots.push(MealSlot::CrackerBarrel);
    }

    slots
}

/// Generate a full meal plan: one uniformly random eligible recipe per
/// scheduled slot, scaled to the roster size.
///
/// Fails on the first slot whose category has no recipes; no partial plan
/// is returned. Callers wanting reproducible plans pass a seeded rng.
pub fn generate_plan(
    catalog: &RecipeCatalog,
    days: u32,
    num_scouts: u32,
    meals_per_day: u8,
    rng: &mut impl Rng,
) -> Result<MealPlan> {
    if num_scouts == 0 {
        return Err(GrubError::InvalidRoster(num_scouts));
    }
    if days == 0 {
        return Err(GrubError::InvalidDateRange);
    }
    if !(1..=4).contains(&meals_per_day) {
        return Err(GrubError::InvalidMealsPerDay(meals_per_day));
    }

    let mut plan = Vec::with_capacity(days as usize);
    for day in 1..=days {
        let mut meals = Vec::new();
        for slot in slots_for_day(day, days, meals_per_day) {
            let candidates = catalog.by_category(slot.category());
            if candidates.is_empty() {
                return Err(GrubError::EmptyCategory(slot.category()));
            }

            let recipe = candidates[rng.gen_range(0..candidates.len())].clone();
            let scaled = scale_recipe(&recipe, num_scouts)?;
            meals.push(Meal::new(slot, vec![recipe], scaled));
        }
        plan.push(DayPlan { day, meals });
    }

    Ok(plan)
}

/// Day count for a trip running `start` to `end` inclusive.
///
/// The span is measured from the day after the start, then widened by two,
/// matching how the plan treats day 1 as a no-meal arrival evening. A
/// same-day trip counts as one day; an end before the start is rejected.
pub fn trip_day_count(start: NaiveDate, end: NaiveDate) -> Result<u32> {
    let shifted = start + Days::new(1);
    let days = (end - shifted).num_days() + 2;
    if days < 1 {
        return Err(GrubError::InvalidDateRange);
    }
    Ok(days as u32)
}
