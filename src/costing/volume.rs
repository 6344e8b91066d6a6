use serde::Serialize;

use crate::costing::constants::{
    DEFAULT_DENSITY_KEY, GRAMS_PER_CUP, GRAMS_PER_POUND, TBSP_PER_CUP, TSP_PER_CUP,
};
use crate::costing::units::normalize_unit;
use crate::models::VolumeConversionResult;

/// Outcome of a volume costing, tagged with whether the density was a real match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "density", rename_all = "camelCase")]
pub enum VolumeCosting {
    Matched(VolumeConversionResult),
    /// The requested type had no density entry; the default (flour) was used.
    DefaultDensity {
        requested: String,
        result: VolumeConversionResult,
    },
}

impl VolumeCosting {
    pub fn result(&self) -> &VolumeConversionResult {
        match self {
            VolumeCosting::Matched(result) => result,
            VolumeCosting::DefaultDensity { result, .. } => result,
        }
    }

    pub fn used_default(&self) -> bool {
        matches!(self, VolumeCosting::DefaultDensity { .. })
    }
}

/// Grams per cup for an ingredient type, if the density table has it.
pub fn grams_per_cup(ingredient_type: &str) -> Option<f64> {
    GRAMS_PER_CUP
        .get(normalize_unit(ingredient_type).as_str())
        .copied()
}

fn convert(cost_per_pound: f64, ingredient_type: &str, grams_per_cup: f64) -> VolumeConversionResult {
    let cups_per_pound = GRAMS_PER_POUND / grams_per_cup;
    let cost_per_cup = cost_per_pound / cups_per_pound;

    VolumeConversionResult {
        ingredient_type: ingredient_type.to_string(),
        cost_per_pound,
        grams_per_cup,
        cups_per_pound,
        cost_per_cup,
        cost_per_tbsp: cost_per_cup / TBSP_PER_CUP,
        cost_per_tsp: cost_per_cup / TSP_PER_CUP,
    }
}

/// Price a weight-bought dry ingredient by the cup, tablespoon, and teaspoon.
pub fn compute_volume_costs(cost_per_pound: f64, ingredient_type: &str) -> VolumeCosting {
    if let Some(density) = grams_per_cup(ingredient_type) {
        return VolumeCosting::Matched(convert(cost_per_pound, ingredient_type, density));
    }

    tracing::warn!(
        "No density for '{}'; using {} density",
        ingredient_type,
        DEFAULT_DENSITY_KEY
    );
    let density = GRAMS_PER_CUP
        .get(DEFAULT_DENSITY_KEY)
        .copied()
        .unwrap_or(120.0);

    VolumeCosting::DefaultDensity {
        requested: ingredient_type.to_string(),
        result: convert(cost_per_pound, DEFAULT_DENSITY_KEY, density),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flour() {
        let costing = compute_volume_costs(2.0, "flour");
        assert!(!costing.used_default());
        let result = costing.result();
        assert!((result.cups_per_pound - 3.78).abs() < 0.001);
        assert!((result.cost_per_cup - 0.529).abs() < 0.001);
        assert!((result.cost_per_tbsp - result.cost_per_cup / 16.0).abs() < 1e-12);
        assert!((result.cost_per_tsp - result.cost_per_cup / 48.0).abs() < 1e-12);
    }

    #[test]
    fn test_key_normalization() {
        assert_eq!(grams_per_cup("Brown Sugar"), Some(220.0));
        assert_eq!(grams_per_cup("brown_sugar"), Some(220.0));
    }

    #[test]
    fn test_unknown_type_is_flagged() {
        let costing = compute_volume_costs(2.0, "quinoa");
        assert!(costing.used_default());
        match &costing {
            VolumeCosting::DefaultDensity { requested, result } => {
                assert_eq!(requested, "quinoa");
                assert_eq!(result.grams_per_cup, 120.0);
            }
            VolumeCosting::Matched(_) => panic!("expected default density"),
        }
    }
}
