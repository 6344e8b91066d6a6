use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// culinary_cost: case pricing, yields, and recipe costing for a culinary lab.
#[derive(Parser, Debug)]
#[command(name = "culinary_cost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding ingredients.json and recipes.json.
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to a JSON config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Per-unit costs for a case price and packaging.
    UnitCost {
        /// Case quantity (e.g. 40).
        #[arg(long)]
        quantity: f64,

        /// Case unit (e.g. lb, gal, each).
        #[arg(long)]
        unit: String,

        /// Case price.
        #[arg(long)]
        price: f64,

        /// Usable fraction after prep, in (0, 1].
        #[arg(long)]
        yield_factor: Option<f64>,
    },

    /// Cost a case sold both by count and by weight.
    DualUnit {
        #[arg(long)]
        quantity: f64,

        #[arg(long)]
        unit: String,

        #[arg(long)]
        secondary_quantity: f64,

        #[arg(long)]
        secondary_unit: String,

        #[arg(long)]
        price: f64,

        #[arg(long)]
        yield_factor: Option<f64>,
    },

    /// AP to EP cost from trim and cooking losses.
    EpCost {
        /// As-purchased cost per unit.
        #[arg(long)]
        ap: f64,

        /// Trim loss percentage.
        #[arg(long, default_value = "0")]
        trim: f64,

        /// Cooking loss percentage.
        #[arg(long, default_value = "0")]
        cook: f64,

        /// Recipe quantity, to print a line cost.
        #[arg(long)]
        quantity: Option<f64>,
    },

    /// Cup, tablespoon, and teaspoon costs for a dry ingredient.
    Volume {
        /// Ingredient type (flour, sugar, ...) or a stored ingredient name.
        ingredient: String,

        /// Cost per pound; looked up from the stored ingredient when omitted.
        #[arg(long)]
        cost_per_pound: Option<f64>,
    },

    /// Manage stored ingredients.
    Ingredients {
        #[command(subcommand)]
        action: IngredientAction,
    },

    /// Cost stored recipes.
    Recipe {
        #[command(subcommand)]
        action: RecipeAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum IngredientAction {
    /// List stored ingredients with AP and EP costs.
    List,

    /// Interactively add an ingredient.
    Add,

    /// Remove an ingredient by name.
    Remove { name: String },

    /// Import a CSV vendor price list.
    Import {
        path: PathBuf,

        /// Overwrite ingredients that already exist.
        #[arg(long)]
        replace: bool,
    },

    /// Write a CSV per-unit cost report.
    Report { path: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum RecipeAction {
    /// List stored recipes.
    List,

    /// Cost a recipe by name.
    Cost {
        name: String,

        /// Ask before using non-exact ingredient matches.
        #[arg(long)]
        confirm: bool,
    },
}
