use serde::{Deserialize, Serialize};

use crate::models::Named;

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeLine {
    /// Ingredient name as written in the recipe; linked to the store by name matching.
    pub ingredient: String,

    pub quantity: f64,

    /// Unit of `quantity`; the ingredient's case unit when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl RecipeLine {
    pub fn new(ingredient: impl Into<String>, quantity: f64, unit: Option<&str>) -> Self {
        Self {
            ingredient: ingredient.into(),
            quantity,
            unit: unit.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,

    pub servings: f64,

    /// Selling price per serving, for food-cost percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_price: Option<f64>,

    #[serde(default)]
    pub lines: Vec<RecipeLine>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, servings: f64) -> Self {
        Self {
            name: name.into(),
            servings,
            menu_price: None,
            lines: Vec::new(),
        }
    }

    pub fn with_line(mut self, line: RecipeLine) -> Self {
        self.lines.push(line);
        self
    }

    pub fn with_menu_price(mut self, price: f64) -> Self {
        self.menu_price = Some(price);
        self
    }
}

impl Named for Recipe {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Costed recipe line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineCost {
    pub ingredient: String,
    /// Store ingredient the line was linked to.
    pub matched: String,
    pub quantity: f64,
    pub unit: String,
    pub ap_cost: f64,
    pub yield_pct: f64,
    pub ep_cost: f64,
    pub line_cost: f64,
}

/// Recipe total and per-serving cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCost {
    pub recipe: String,
    pub lines: Vec<LineCost>,
    pub total_cost: f64,
    /// None when servings is not positive.
    pub cost_per_serving: Option<f64>,
    /// Cost per serving as a percentage of the menu price.
    pub food_cost_pct: Option<f64>,
    /// Lines that could not be linked or priced; excluded from the total.
    pub unresolved: Vec<String>,
}

impl RecipeCost {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}
