use clap::{Args, Parser, Subcommand};

/// GrubMaster: meal planning and budget auditing for scout troop campouts.
#[derive(Parser, Debug)]
#[command(name = "grubmaster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the data JSON file.
    #[arg(short, long, default_value = "grubmaster_data.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a meal plan and shopping list for a trip.
    Plan(PlanArgs),

    /// List, show, edit, or delete saved trips.
    Trips {
        #[command(subcommand)]
        action: Option<TripsAction>,
    },

    /// Browse the recipe catalog, show one recipe, or add a custom recipe.
    Recipes {
        /// Filter by category (breakfast, lunch, dinner, snack, dessert).
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive search against recipe and ingredient names.
        #[arg(long)]
        search: Option<String>,

        #[command(subcommand)]
        action: Option<RecipesAction>,
    },

    /// Compare a trip's planned cost against its receipts.
    Audit {
        /// Trip id (e.g. trip_1).
        trip: String,
    },

    /// List, add, or delete purchase receipts for a trip.
    Receipts {
        /// Trip id (e.g. trip_1).
        trip: String,

        #[command(subcommand)]
        action: Option<ReceiptsAction>,
    },

    /// Show or update troop settings.
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Trip name (prompted when omitted).
    #[arg(long)]
    pub name: Option<String>,

    /// Roster size (defaults to the saved settings).
    #[arg(long)]
    pub scouts: Option<u32>,

    /// Trip start date, YYYY-MM-DD (prompted when omitted).
    #[arg(long)]
    pub start: Option<String>,

    /// Trip end date, YYYY-MM-DD (prompted when omitted).
    #[arg(long)]
    pub end: Option<String>,

    /// Meals per day (1-4).
    #[arg(long, default_value_t = 3)]
    pub meals_per_day: u8,

    /// Seed for reproducible recipe selection.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the shopping list to a text file.
    #[arg(long)]
    pub export: Option<String>,

    /// Write the shopping list to a CSV file.
    #[arg(long)]
    pub csv: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum TripsAction {
    /// List saved trips.
    List,

    /// Show one trip's full plan and shopping list.
    Show {
        /// Trip id (e.g. trip_1).
        trip: String,
    },

    /// Delete a trip and its receipts.
    Delete {
        /// Trip id (e.g. trip_1).
        trip: String,
    },

    /// Edit a trip: change a meal's recipes or rescale the roster.
    Edit(EditArgs),
}

impl Default for TripsAction {
    fn default() -> Self {
        TripsAction::List
    }
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Trip id (e.g. trip_1).
    pub trip: String,

    /// Day number to edit (1-based).
    #[arg(long)]
    pub day: Option<u32>,

    /// Meal slot on that day (breakfast, lunch, dinner, cracker-barrel).
    #[arg(long)]
    pub slot: Option<String>,

    /// Recipe to add to the meal (by name, fuzzy-matched).
    #[arg(long)]
    pub add: Option<String>,

    /// Recipe to remove from the meal (by name, fuzzy-matched).
    #[arg(long)]
    pub remove: Option<String>,

    /// Rescale the whole trip to a new roster size.
    #[arg(long)]
    pub scouts: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum RecipesAction {
    /// Show one recipe with ingredients, steps, and costs.
    Show {
        /// Recipe id (e.g. r1) or name.
        recipe: String,
    },

    /// Add a custom recipe interactively.
    Add,
}

#[derive(Subcommand, Debug)]
pub enum ReceiptsAction {
    /// List receipts for the trip.
    List,

    /// Record a receipt interactively.
    Add,

    /// Delete one receipt.
    Delete {
        /// Receipt id (e.g. receipt_1).
        receipt: String,
    },
}

impl Default for ReceiptsAction {
    fn default() -> Self {
        ReceiptsAction::List
    }
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Show current settings.
    Show,

    /// Update one or more settings values.
    Set {
        /// Troop display name.
        #[arg(long)]
        troop_name: Option<String>,

        /// Default roster size for new plans.
        #[arg(long)]
        scouts: Option<u32>,

        /// Target cost per scout per day, in dollars.
        #[arg(long)]
        target: Option<f64>,
    },
}

impl Default for SettingsAction {
    fn default() -> Self {
        SettingsAction::Show
    }
}
