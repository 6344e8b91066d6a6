use crate::costing::yields::compute_line_cost;
use crate::error::Result;
use crate::matching::{NameMatch, NameMatcher};
use crate::models::{LineCost, Recipe, RecipeCost, RecipeLine};
use crate::state::IngredientStore;

/// Total, per-serving cost, and food-cost percentage for costed lines.
///
/// Returns (total, cost per serving, food cost %).
pub fn summarize_lines(
    lines: &[LineCost],
    servings: f64,
    menu_price: Option<f64>,
) -> (f64, Option<f64>, Option<f64>) {
    let total: f64 = lines.iter().map(|l| l.line_cost).sum();

    let per_serving = (servings.is_finite() && servings > 0.0).then(|| total / servings);

    let food_cost_pct = match (per_serving, menu_price) {
        (Some(cost), Some(price)) if price.is_finite() && price > 0.0 => Some(cost / price * 100.0),
        _ => None,
    };

    (total, per_serving, food_cost_pct)
}

fn cost_line(line: &RecipeLine, matched: &NameMatch, store: &IngredientStore) -> Option<LineCost> {
    let ingredient = store.get(&matched.candidate)?;
    let Some(record) = ingredient.cost_record_for(line.unit.as_deref()) else {
        tracing::warn!(
            "Cannot price '{}' in {}",
            ingredient.name,
            line.unit.as_deref().unwrap_or("its case unit")
        );
        return None;
    };
    let (trim, cook) = ingredient.loss_pcts();
    if !record.has_usable_yield() {
        tracing::warn!(
            "'{}' has no usable yield (trim {}% + cooking {}%)",
            ingredient.name,
            trim,
            cook
        );
        return None;
    }

    Some(LineCost {
        ingredient: line.ingredient.clone(),
        matched: ingredient.name.clone(),
        quantity: line.quantity,
        unit: line
            .unit
            .clone()
            .unwrap_or_else(|| ingredient.case.unit.clone()),
        ap_cost: record.ap_cost,
        yield_pct: record.yield_pct,
        ep_cost: record.ep_cost,
        line_cost: compute_line_cost(line.quantity, record.ap_cost, trim, cook),
    })
}

/// Cost a recipe against the store, asking `accept` about every non-exact match.
///
/// Lines that cannot be linked, are rejected, have a unit the ingredient
/// cannot be priced in, or lose everything to trim and cooking are listed
/// in `unresolved` and left out of the total.
pub fn cost_recipe_with<F>(
    recipe: &Recipe,
    store: &IngredientStore,
    matcher: &NameMatcher,
    mut accept: F,
) -> Result<RecipeCost>
where
    F: FnMut(&RecipeLine, &NameMatch) -> Result<bool>,
{
    let mut lines = Vec::with_capacity(recipe.lines.len());
    let mut unresolved = Vec::new();

    for line in &recipe.lines {
        let matched = match matcher.best_match(&line.ingredient, store.names()) {
            Some(m) if m.is_exact() || accept(line, &m)? => m,
            _ => {
                tracing::warn!("No ingredient linked for '{}'", line.ingredient);
                unresolved.push(line.ingredient.clone());
                continue;
            }
        };

        match cost_line(line, &matched, store) {
            Some(cost) => lines.push(cost),
            None => unresolved.push(line.ingredient.clone()),
        }
    }

    let (total_cost, cost_per_serving, food_cost_pct) =
        summarize_lines(&lines, recipe.servings, recipe.menu_price);

    Ok(RecipeCost {
        recipe: recipe.name.clone(),
        lines,
        total_cost,
        cost_per_serving,
        food_cost_pct,
        unresolved,
    })
}

/// Cost a recipe, accepting every match the matcher finds.
pub fn cost_recipe(
    recipe: &Recipe,
    store: &IngredientStore,
    matcher: &NameMatcher,
) -> Result<RecipeCost> {
    cost_recipe_with(recipe, store, matcher, |_, _| Ok(true))
}
