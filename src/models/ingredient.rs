use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::costing::calculator::compute_unit_costs;
use crate::costing::constants::{category_losses, DEFAULT_YIELD_FACTOR};
use crate::costing::units::{resolve_unit, MeasureUnit};
use crate::costing::volume::{compute_volume_costs, VolumeCosting};
use crate::error::CostError;
use crate::models::{CaseDescriptor, IngredientCostRecord, Named, UnitCostResult};

/// Purchasing category; drives default trim and cooking losses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Produce,
    Meat,
    Poultry,
    Seafood,
    Dairy,
    DryGoods,
    Bakery,
    Beverage,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Produce,
        Category::Meat,
        Category::Poultry,
        Category::Seafood,
        Category::Dairy,
        Category::DryGoods,
        Category::Bakery,
        Category::Beverage,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "produce",
            Category::Meat => "meat",
            Category::Poultry => "poultry",
            Category::Seafood => "seafood",
            Category::Dairy => "dairy",
            Category::DryGoods => "dry_goods",
            Category::Bakery => "bakery",
            Category::Beverage => "beverage",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();

        match key.as_str() {
            "produce" | "vegetable" | "vegetables" | "fruit" => Ok(Category::Produce),
            "meat" | "beef" | "pork" | "lamb" => Ok(Category::Meat),
            "poultry" | "chicken" | "turkey" => Ok(Category::Poultry),
            "seafood" | "fish" | "shellfish" => Ok(Category::Seafood),
            "dairy" | "eggs" => Ok(Category::Dairy),
            "drygoods" | "dry" | "pantry" | "baking" => Ok(Category::DryGoods),
            "bakery" | "bread" => Ok(Category::Bakery),
            "beverage" | "beverages" | "drinks" => Ok(Category::Beverage),
            "other" | "" => Ok(Category::Other),
            _ => Err(CostError::InvalidInput(format!("Unknown category: {}", s))),
        }
    }
}

/// A purchasable ingredient with its case pricing and prep losses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,

    #[serde(default)]
    pub category: Category,

    pub case: CaseDescriptor,

    pub case_price: f64,

    /// Overrides the category default when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim_loss_pct: Option<f64>,

    /// Overrides the category default when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_loss_pct: Option<f64>,

    /// Key into the density table; falls back to the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        case: CaseDescriptor,
        case_price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            case,
            case_price,
            trim_loss_pct: None,
            cooking_loss_pct: None,
            density_key: None,
            vendor: None,
        }
    }

    pub fn with_losses(mut self, trim_loss_pct: f64, cooking_loss_pct: f64) -> Self {
        self.trim_loss_pct = Some(trim_loss_pct);
        self.cooking_loss_pct = Some(cooking_loss_pct);
        self
    }

    /// Per-unit costs of the primary case view.
    pub fn unit_costs(&self, yield_factor: f64) -> Option<UnitCostResult> {
        compute_unit_costs(&self.case, self.case_price, yield_factor)
    }

    /// Per-unit costs of the secondary view of a dual-unit case.
    pub fn secondary_unit_costs(&self, yield_factor: f64) -> Option<UnitCostResult> {
        let secondary = self.case.secondary_case()?;
        compute_unit_costs(&secondary, self.case_price, yield_factor)
    }

    /// (trim %, cooking %), explicit values first, then the category default.
    pub fn loss_pcts(&self) -> (f64, f64) {
        let (default_trim, default_cook) = category_losses(self.category);
        if self.trim_loss_pct.is_none() || self.cooking_loss_pct.is_none() {
            tracing::debug!(
                "Using {} default losses for '{}' ({}% trim, {}% cooking)",
                self.category,
                self.name,
                default_trim,
                default_cook
            );
        }
        (
            self.trim_loss_pct.unwrap_or(default_trim),
            self.cooking_loss_pct.unwrap_or(default_cook),
        )
    }

    /// Recorded losses lie in [0, 100) and leave some edible portion.
    pub fn has_usable_losses(&self) -> bool {
        let in_range = |pct: Option<f64>| pct.is_none_or(|p| (0.0..100.0).contains(&p));
        let (trim, cook) = self.loss_pcts();
        in_range(self.trim_loss_pct) && in_range(self.cooking_loss_pct) && trim + cook < 100.0
    }

    /// As-purchased cost per unit.
    ///
    /// With no unit, this is the cost per case unit. Otherwise the unit is
    /// looked up in the primary view, then in the secondary view of a
    /// dual-unit case.
    pub fn ap_cost_per(&self, unit: Option<&str>) -> Option<f64> {
        let primary = self.unit_costs(DEFAULT_YIELD_FACTOR)?;

        let Some(unit) = unit else {
            return Some(primary.adjusted_cost_per_unit);
        };
        let wanted = resolve_unit(unit)?;

        primary.cost_per(wanted).or_else(|| {
            self.secondary_unit_costs(DEFAULT_YIELD_FACTOR)
                .and_then(|secondary| secondary.cost_per(wanted))
        })
    }

    /// AP and EP costs per unit, using this ingredient's losses.
    pub fn cost_record_for(&self, unit: Option<&str>) -> Option<IngredientCostRecord> {
        let ap_cost = self.ap_cost_per(unit)?;
        let (trim, cook) = self.loss_pcts();
        Some(IngredientCostRecord::new(ap_cost, trim, cook))
    }

    /// Volume pricing, available when the case is priced by weight.
    pub fn volume_costs(&self) -> Option<VolumeCosting> {
        let cost_per_pound = self.ap_cost_per(Some(MeasureUnit::Pound.label()))?;
        let key = self.density_key.as_deref().unwrap_or(&self.name);
        Some(compute_volume_costs(cost_per_pound, key))
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.case.is_valid()
            && self.case_price.is_finite()
            && self.case_price > 0.0
    }
}

impl Named for Ingredient {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ingredient {}
