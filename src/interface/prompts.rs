use dialoguer::{Confirm, Input, Select};

use crate::error::{CostError, Result};
use crate::matching::NameMatch;
use crate::models::{CaseDescriptor, Category, Ingredient, RecipeLine};

/// Parse a strictly positive number from user input.
fn parse_positive(input: &str, what: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| CostError::InvalidInput(format!("Invalid number for {}", what)))?;

    if !(value.is_finite() && value > 0.0) {
        return Err(CostError::InvalidInput(format!("{} must be positive", what)));
    }
    Ok(value)
}

/// Parse an optional loss percentage in [0, 100); blank means "use the category default".
fn parse_loss_pct(input: &str, what: &str) -> Result<Option<f64>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let value: f64 = input
        .parse()
        .map_err(|_| CostError::InvalidInput(format!("Invalid number for {}", what)))?;

    if !(0.0..100.0).contains(&value) {
        return Err(CostError::InvalidInput(format!(
            "{} must be between 0 and 100",
            what
        )));
    }
    Ok(Some(value))
}

fn prompt_text(prompt: &str, allow_empty: bool) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .interact_text()?;
    Ok(input.trim().to_string())
}

fn prompt_category() -> Result<Category> {
    let options: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();

    let selection = Select::new()
        .with_prompt("Category")
        .items(&options)
        .default(Category::ALL.len() - 1)
        .interact()?;

    Ok(Category::ALL
        .get(selection)
        .copied()
        .unwrap_or_default())
}

/// Walk the user through entering a new ingredient.
pub fn prompt_new_ingredient() -> Result<Ingredient> {
    let name = prompt_text("Ingredient name", false)?;
    let category = prompt_category()?;

    let quantity = parse_positive(&prompt_text("Case quantity (e.g. 40)", false)?, "case quantity")?;
    let unit = prompt_text("Case unit (e.g. lb, gal, each)", false)?;
    let price = parse_positive(&prompt_text("Case price", false)?, "case price")?;

    let mut case = CaseDescriptor::new(quantity, unit);
    if prompt_yes_no("Also sold by a second unit (e.g. count and weight)?", false)? {
        let secondary_quantity = parse_positive(
            &prompt_text("Secondary quantity (e.g. 50)", false)?,
            "secondary quantity",
        )?;
        let secondary_unit = prompt_text("Secondary unit (e.g. lb)", false)?;
        case = case.with_secondary(secondary_quantity, secondary_unit);
    }

    let mut ingredient = Ingredient::new(name, category, case, price);
    ingredient.trim_loss_pct = parse_loss_pct(
        &prompt_text("Trim loss % (blank for category default)", true)?,
        "trim loss",
    )?;
    ingredient.cooking_loss_pct = parse_loss_pct(
        &prompt_text("Cooking loss % (blank for category default)", true)?,
        "cooking loss",
    )?;
    if !ingredient.has_usable_losses() {
        return Err(CostError::InvalidInput(
            "Trim and cooking losses together must stay below 100%".to_string(),
        ));
    }

    Ok(ingredient)
}

/// Ask whether a fuzzy match should be used for a recipe line.
pub fn confirm_match(line: &RecipeLine, matched: &NameMatch) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(format!(
            "Use '{}' for '{}'? (score {:.2})",
            matched.candidate, line.ingredient, matched.score
        ))
        .default(true)
        .interact()?)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
