use crate::costing::volume::VolumeCosting;
use crate::models::{
    DualUnitCostResult, Ingredient, IngredientCostRecord, Recipe, RecipeCost, UnitCostResult,
};

/// Format a cost as dollars; sub-dollar amounts keep four decimals.
pub fn format_currency(value: f64) -> String {
    if value.abs() < 1.0 {
        format!("${:.4}", value)
    } else {
        format!("${:.2}", value)
    }
}

/// Display per-unit costs for a case.
pub fn display_unit_costs(result: &UnitCostResult, unit: &str) {
    println!();
    println!("=== Unit Costs ===");
    println!();
    println!("Base cost per {}: {}", unit, format_currency(result.base_cost_per_unit));
    if result.yield_factor < 1.0 {
        println!(
            "Adjusted for {:.0}% yield: {}",
            result.yield_factor * 100.0,
            format_currency(result.adjusted_cost_per_unit)
        );
    }

    match result.domain {
        Some(domain) => {
            println!();
            println!("--- Per {} unit ---", domain);
            for (unit, cost) in &result.costs {
                println!("  {:>8}  {}", unit.label(), format_currency(*cost));
            }
        }
        None => {
            println!();
            println!("Unit '{}' is not a known weight, volume, or count unit.", unit);
            println!("No derived costs.");
        }
    }
    println!();
}

/// Display both views of a dual-unit case.
pub fn display_dual_unit_costs(result: &DualUnitCostResult) {
    let primary = &result.primary_unit;
    let secondary = &result.secondary_unit;

    println!();
    println!("=== Dual-Unit Costs ===");
    println!();
    println!(
        "By {:<6} {} x {:<6} => {} per {}",
        primary.unit,
        primary.quantity,
        primary.unit,
        format_currency(primary.cost_per_unit),
        primary.unit
    );
    println!(
        "By {:<6} {} x {:<6} => {} per {}",
        secondary.unit,
        secondary.quantity,
        secondary.unit,
        format_currency(secondary.cost_per_unit),
        secondary.unit
    );
    println!();
    println!(
        "{:.3} {} per {} | {:.3} {} per {}",
        result.conversions.weight_per_piece,
        secondary.unit,
        primary.unit,
        result.conversions.pieces_per_pound,
        primary.unit,
        secondary.unit
    );
    println!("Both views price the same case; do not add them together.");
    println!();
}

/// Display an AP to EP costing, with an optional line total.
pub fn display_ep_cost(record: &IngredientCostRecord, quantity: Option<f64>) {
    println!();
    println!("AP cost:      {}", format_currency(record.ap_cost));
    println!(
        "Losses:       {:.1}% trim, {:.1}% cooking",
        record.trim_loss_pct, record.cooking_loss_pct
    );
    println!("Yield:        {:.1}%", record.yield_pct);

    if record.has_usable_yield() {
        println!("EP cost:      {}", format_currency(record.ep_cost));
    } else {
        println!("EP cost:      {} (no usable yield)", format_currency(0.0));
    }

    if let Some(qty) = quantity {
        println!("Line cost:    {}", format_currency(qty * record.ep_cost));
    }
    println!();
}

/// Display volume pricing, flagging a substituted density.
pub fn display_volume_costs(costing: &VolumeCosting) {
    let result = costing.result();

    println!();
    if let VolumeCosting::DefaultDensity { requested, .. } = costing {
        println!(
            "Note: no density for '{}'; using {} ({:.0} g/cup).",
            requested, result.ingredient_type, result.grams_per_cup
        );
    }
    println!(
        "{}: {:.0} g/cup, {:.2} cups/lb at {} per lb",
        result.ingredient_type,
        result.grams_per_cup,
        result.cups_per_pound,
        format_currency(result.cost_per_pound)
    );
    println!("  per cup   {}", format_currency(result.cost_per_cup));
    println!("  per tbsp  {}", format_currency(result.cost_per_tbsp));
    println!("  per tsp   {}", format_currency(result.cost_per_tsp));
    println!();
}

/// Display ingredients with their case and per-unit costs.
pub fn display_ingredient_list(ingredients: &[&Ingredient]) {
    if ingredients.is_empty() {
        println!("No ingredients. Use 'ingredients add' or 'ingredients import'.");
        return;
    }

    let width = ingredients.iter().map(|i| i.name.len()).max().unwrap_or(10);

    println!();
    println!("=== Ingredients ({}) ===", ingredients.len());
    println!();

    for ingredient in ingredients {
        let per_unit = ingredient
            .cost_record_for(None)
            .map(|r| {
                format!(
                    "{} AP / {} EP per {}",
                    format_currency(r.ap_cost),
                    format_currency(r.ep_cost),
                    ingredient.case.unit
                )
            })
            .unwrap_or_else(|| "no price".to_string());

        println!(
            "  {:<width$}  {:<10} {:>16}  {:>9}  {}",
            ingredient.name,
            ingredient.category.as_str(),
            ingredient.case.summary(),
            format_currency(ingredient.case_price),
            per_unit,
            width = width
        );
    }
    println!();
}

pub fn display_recipe_list(recipes: &[&Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    println!();
    for recipe in recipes {
        println!(
            "  {} ({} servings, {} lines)",
            recipe.name,
            recipe.servings,
            recipe.lines.len()
        );
    }
    println!();
}

/// Display a costed recipe as a table.
pub fn display_recipe_cost(cost: &RecipeCost) {
    println!();
    println!("=== {} ===", cost.recipe);
    println!();

    let width = cost
        .lines
        .iter()
        .map(|l| l.matched.len())
        .max()
        .unwrap_or(10);

    for line in &cost.lines {
        println!(
            "  {:<width$}  {:>8.2} {:<6} @ {:>9} EP ({:>5.1}% yield) = {:>9}",
            line.matched,
            line.quantity,
            line.unit,
            format_currency(line.ep_cost),
            line.yield_pct,
            format_currency(line.line_cost),
            width = width
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Total cost: {}", format_currency(cost.total_cost));
    match cost.cost_per_serving {
        Some(per) => println!("Cost per serving: {}", format_currency(per)),
        None => println!("Cost per serving: n/a (no servings)"),
    }
    if let Some(pct) = cost.food_cost_pct {
        println!("Food cost: {:.1}%", pct);
    }
    if !cost.is_complete() {
        println!("Not costed: {}", cost.unresolved.join(", "));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(23.75), "$23.75");
        assert_eq!(format_currency(0.0703125), "$0.0703");
        assert_eq!(format_currency(1.5), "$1.50");
    }
}
