use clap::Parser;
use tracing_subscriber::EnvFilter;

use culinary_cost_rs::cli::{Cli, Command, IngredientAction, RecipeAction};
use culinary_cost_rs::config::CostingConfig;
use culinary_cost_rs::costing::{
    compute_dual_unit_costs, compute_unit_costs, compute_volume_costs, cost_recipe,
    cost_recipe_with,
};
use culinary_cost_rs::error::{CostError, Result};
use culinary_cost_rs::interface::{
    confirm_match, display_dual_unit_costs, display_ep_cost, display_ingredient_list,
    display_recipe_cost, display_recipe_list, display_unit_costs, display_volume_costs,
    prompt_new_ingredient, prompt_yes_no,
};
use culinary_cost_rs::models::{CaseDescriptor, IngredientCostRecord};
use culinary_cost_rs::state::{
    import_price_list, load_ingredients, load_recipes, save_ingredients, write_cost_report,
    IngredientStore, JsonDirStore, RecipeBook,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; RUST_LOG wins over the default level.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "culinary_cost_rs=debug"
    } else {
        "culinary_cost_rs=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file, then environment, then command-line flags.
fn load_config(cli: &Cli) -> Result<CostingConfig> {
    let mut config = match &cli.config {
        Some(path) => CostingConfig::load(path)?,
        None => CostingConfig::default(),
    }
    .with_env();

    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    tracing::debug!("Using config {:?}", config);
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Command::UnitCost {
            quantity,
            unit,
            price,
            yield_factor,
        } => cmd_unit_cost(&config, quantity, &unit, price, yield_factor),
        Command::DualUnit {
            quantity,
            unit,
            secondary_quantity,
            secondary_unit,
            price,
            yield_factor,
        } => {
            let case = CaseDescriptor::new(quantity, unit)
                .with_secondary(secondary_quantity, secondary_unit);
            cmd_dual_unit(&config, &case, price, yield_factor)
        }
        Command::EpCost {
            ap,
            trim,
            cook,
            quantity,
        } => {
            display_ep_cost(&IngredientCostRecord::new(ap, trim, cook), quantity);
            Ok(())
        }
        Command::Volume {
            ingredient,
            cost_per_pound,
        } => cmd_volume(&config, &ingredient, cost_per_pound),
        Command::Ingredients { action } => cmd_ingredients(&config, action),
        Command::Recipe { action } => cmd_recipe(&config, action),
    }
}

fn cmd_unit_cost(
    config: &CostingConfig,
    quantity: f64,
    unit: &str,
    price: f64,
    yield_factor: Option<f64>,
) -> Result<()> {
    let case = CaseDescriptor::new(quantity, unit);
    let yield_factor = yield_factor.unwrap_or(config.default_yield_factor);

    match compute_unit_costs(&case, price, yield_factor) {
        Some(result) => display_unit_costs(&result, unit),
        None => println!(
            "Not enough information: price and quantity must be positive, \
             the unit non-empty, and the yield factor in (0, 1]."
        ),
    }
    Ok(())
}

fn cmd_dual_unit(
    config: &CostingConfig,
    case: &CaseDescriptor,
    price: f64,
    yield_factor: Option<f64>,
) -> Result<()> {
    let yield_factor = yield_factor.unwrap_or(config.default_yield_factor);

    match compute_dual_unit_costs(case, price, yield_factor) {
        Some(result) => display_dual_unit_costs(&result),
        None => println!("Not enough information: both quantities and the price must be positive."),
    }
    Ok(())
}

fn cmd_volume(config: &CostingConfig, ingredient: &str, cost_per_pound: Option<f64>) -> Result<()> {
    if let Some(cost) = cost_per_pound {
        display_volume_costs(&compute_volume_costs(cost, ingredient));
        return Ok(());
    }

    let port = JsonDirStore::new(&config.data_dir);
    let store = IngredientStore::new(load_ingredients(&port)?);
    let stored = store
        .get(ingredient)
        .ok_or_else(|| CostError::NotFound(ingredient.to_string()))?;

    match stored.volume_costs() {
        Some(costing) => display_volume_costs(&costing),
        None => println!("'{}' is not priced by weight; pass --cost-per-pound.", stored.name),
    }
    Ok(())
}

fn cmd_ingredients(config: &CostingConfig, action: IngredientAction) -> Result<()> {
    let port = JsonDirStore::new(&config.data_dir);
    let mut store = IngredientStore::new(load_ingredients(&port)?);

    match action {
        IngredientAction::List => {
            display_ingredient_list(&store.all());
            return Ok(());
        }
        IngredientAction::Report { path } => {
            write_cost_report(&store.all(), &path)?;
            println!("Wrote {} ingredients to {}", store.len(), path.display());
            return Ok(());
        }
        IngredientAction::Add => {
            let ingredient = prompt_new_ingredient()?;
            let name = ingredient.name.clone();
            store.add(ingredient)?;
            println!("Added: {}", name);
        }
        IngredientAction::Remove { name } => {
            let removed = store.remove(&name)?;
            println!("Removed: {}", removed.name);
        }
        IngredientAction::Import { path, replace } => {
            let mut added = 0;
            let mut skipped = 0;
            for ingredient in import_price_list(&path)? {
                if replace {
                    store.upsert(ingredient);
                    added += 1;
                } else if store.contains(&ingredient.name) {
                    tracing::info!("Skipping existing '{}'", ingredient.name);
                    skipped += 1;
                } else {
                    store.add(ingredient)?;
                    added += 1;
                }
            }
            println!("Imported {} ingredients ({} already present).", added, skipped);
        }
    }

    save_ingredients(&port, &store.to_records())?;
    println!("Ingredients saved to {}.", port.dir().display());
    Ok(())
}

fn cmd_recipe(config: &CostingConfig, action: RecipeAction) -> Result<()> {
    let port = JsonDirStore::new(&config.data_dir);
    let book = RecipeBook::new(load_recipes(&port)?);

    match action {
        RecipeAction::List => display_recipe_list(&book.all()),
        RecipeAction::Cost { name, confirm } => {
            let recipe = book
                .get(&name)
                .ok_or_else(|| CostError::NotFound(name.clone()))?;
            let store = IngredientStore::new(load_ingredients(&port)?);
            let matcher = config.matcher();

            let cost = if confirm {
                cost_recipe_with(recipe, &store, &matcher, confirm_match)?
            } else {
                cost_recipe(recipe, &store, &matcher)?
            };
            display_recipe_cost(&cost);

            if !cost.is_complete() && confirm {
                let show = prompt_yes_no("Show stored ingredient names?", false)?;
                if show {
                    display_ingredient_list(&store.all());
                }
            }
        }
    }
    Ok(())
}
