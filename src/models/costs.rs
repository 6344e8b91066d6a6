use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::costing::units::{MeasureUnit, UnitDomain};

/// Per-unit costs derived from one case price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitCostResult {
    /// Case price divided by case quantity.
    pub base_cost_per_unit: f64,

    /// Base cost divided by the yield factor.
    pub adjusted_cost_per_unit: f64,

    pub yield_factor: f64,

    /// None when the case unit is not in any lookup table.
    pub domain: Option<UnitDomain>,

    /// Adjusted cost per sibling unit; empty for unrecognized units.
    pub costs: BTreeMap<MeasureUnit, f64>,
}

impl UnitCostResult {
    pub fn cost_per(&self, unit: MeasureUnit) -> Option<f64> {
        self.costs.get(&unit).copied()
    }

    pub fn is_unrecognized_unit(&self) -> bool {
        self.costs.is_empty()
    }
}

/// One view of a dual-unit case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitCostView {
    pub quantity: f64,
    pub unit: String,
    pub cost_per_unit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DualUnitConversions {
    /// Secondary quantity per piece (e.g. pounds per potato).
    pub weight_per_piece: f64,
    /// Pieces per secondary unit (e.g. potatoes per pound).
    pub pieces_per_pound: f64,
}

/// Both unit views of the same case, each against the full case price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DualUnitCostResult {
    pub primary_unit: UnitCostView,
    pub secondary_unit: UnitCostView,
    pub conversions: DualUnitConversions,
}

/// As-purchased to edible-portion costing for one ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientCostRecord {
    pub ap_cost: f64,
    pub trim_loss_pct: f64,
    pub cooking_loss_pct: f64,
    pub yield_pct: f64,
    /// Zero when the yield is not positive.
    pub ep_cost: f64,
}

impl IngredientCostRecord {
    pub fn has_usable_yield(&self) -> bool {
        self.yield_pct > 0.0
    }
}

/// Volume pricing for a weight-priced dry ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeConversionResult {
    pub ingredient_type: String,
    pub cost_per_pound: f64,
    pub grams_per_cup: f64,
    pub cups_per_pound: f64,
    pub cost_per_cup: f64,
    pub cost_per_tbsp: f64,
    pub cost_per_tsp: f64,
}
