pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_date, prompt_receipt, prompt_recipe_entry, prompt_scouts, prompt_trip_name,
    prompt_yes_no, resolve_recipe,
};
pub use render::{
    display_audit_report, display_insights, display_meal_plan, display_receipts,
    display_recipe_detail, display_recipes, display_settings, display_shopping_list,
    display_trips, shopping_list_text, write_shopping_csv,
};
