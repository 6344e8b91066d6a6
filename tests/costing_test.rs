#[macro_use]
extern crate assert_float_eq;

use culinary_cost_rs::costing::{
    compute_dual_unit_costs, compute_ep_cost, compute_line_cost, compute_unit_costs,
    compute_volume_costs, MeasureUnit, COUNT_UNITS, OUNCES_PER_KILOGRAM, OUNCES_PER_POUND,
    VOLUME_UNITS, WEIGHT_UNITS,
};
use culinary_cost_rs::models::{CaseDescriptor, IngredientCostRecord};

const EPS: f64 = 1e-9;

#[test]
fn test_known_units_always_produce_costs() {
    for table in [&*WEIGHT_UNITS, &*VOLUME_UNITS, &*COUNT_UNITS] {
        for (key, canonical) in table.iter() {
            let result = compute_unit_costs(&CaseDescriptor::new(10.0, *key), 20.0, 1.0).unwrap();
            assert!(!result.costs.is_empty(), "no costs for '{}'", key);
            assert!(
                result.costs.contains_key(canonical),
                "'{}' missing its own unit {:?}",
                key,
                canonical
            );
        }
    }
}

#[test]
fn test_unknown_units_produce_no_costs() {
    for unit in ["case", "#10 can", "flat", "sleeve", "bag", "pounds-ish2x"] {
        let result = compute_unit_costs(&CaseDescriptor::new(10.0, unit), 20.0, 1.0).unwrap();
        // "pounds-ish2x" normalizes to "poundsishx", which is not a table key
        assert!(result.costs.is_empty(), "unexpected costs for '{}'", unit);
    }
}

#[test]
fn test_weight_siblings_consistent() {
    for unit in ["lb", "oz", "kg", "g"] {
        let result = compute_unit_costs(&CaseDescriptor::new(12.0, unit), 57.3, 0.85).unwrap();
        let per_oz = result.cost_per(MeasureUnit::Ounce).unwrap();
        assert_float_absolute_eq!(
            result.cost_per(MeasureUnit::Pound).unwrap(),
            per_oz * OUNCES_PER_POUND,
            EPS
        );
        assert_float_absolute_eq!(
            result.cost_per(MeasureUnit::Kilogram).unwrap(),
            per_oz * OUNCES_PER_KILOGRAM,
            EPS
        );
    }
}

#[test]
fn test_yield_monotonicity() {
    let case = CaseDescriptor::new(40.0, "lb");
    let full = compute_unit_costs(&case, 45.0, 1.0).unwrap();
    assert_eq!(full.adjusted_cost_per_unit, full.base_cost_per_unit);

    let mut previous = full.adjusted_cost_per_unit;
    for yield_factor in [0.95, 0.9, 0.75, 0.5, 0.25, 0.1] {
        let result = compute_unit_costs(&case, 45.0, yield_factor).unwrap();
        assert!(result.adjusted_cost_per_unit > previous);
        previous = result.adjusted_cost_per_unit;
    }
}

#[test]
fn test_ep_cost_boundaries() {
    for (trim, cook) in [(100.0, 0.0), (60.0, 45.0), (50.0, 50.0), (0.0, 120.0)] {
        assert_eq!(compute_ep_cost(12.0, trim, cook), 0.0);
    }
    assert_eq!(compute_ep_cost(12.0, 0.0, 0.0), 12.0);
}

#[test]
fn test_dual_unit_inverse_law() {
    for (primary, secondary) in [(40.0, 50.0), (1.0, 3.0), (88.0, 50.0), (120.0, 7.5)] {
        let case = CaseDescriptor::new(primary, "each").with_secondary(secondary, "lb");
        let result = compute_dual_unit_costs(&case, 60.0, 1.0).unwrap();
        assert_float_absolute_eq!(
            result.conversions.weight_per_piece * result.conversions.pieces_per_pound,
            1.0,
            EPS
        );
    }
}

#[test]
fn test_scenario_case_of_flour() {
    let result = compute_unit_costs(&CaseDescriptor::new(40.0, "lb"), 45.00, 1.0).unwrap();
    assert_float_absolute_eq!(result.base_cost_per_unit, 1.125, EPS);
    assert_float_absolute_eq!(result.cost_per(MeasureUnit::Ounce).unwrap(), 0.0703, 0.0001);
    assert_float_absolute_eq!(result.cost_per(MeasureUnit::Pound).unwrap(), 1.125, EPS);
}

#[test]
fn test_scenario_gallons() {
    let result = compute_unit_costs(&CaseDescriptor::new(4.0, "gal"), 95.00, 1.0).unwrap();
    assert_float_absolute_eq!(result.cost_per(MeasureUnit::Gallon).unwrap(), 23.75, EPS);
    assert_float_absolute_eq!(result.cost_per(MeasureUnit::FluidOunce).unwrap(), 0.1855, 0.0001);
}

#[test]
fn test_scenario_ep_cost() {
    let record = IngredientCostRecord::new(10.00, 10.0, 20.0);
    assert_float_absolute_eq!(record.yield_pct, 70.0, EPS);
    assert_float_absolute_eq!(record.ep_cost, 14.2857, 0.0001);

    assert_eq!(compute_ep_cost(10.00, 60.0, 45.0), 0.0);
    assert_float_absolute_eq!(compute_line_cost(2.0, 10.0, 10.0, 20.0), 28.5714, 0.0001);
}

#[test]
fn test_scenario_flour_by_volume() {
    let costing = compute_volume_costs(2.00, "flour");
    assert!(!costing.used_default());
    assert_float_absolute_eq!(costing.result().cups_per_pound, 3.78, 0.001);
    assert_float_absolute_eq!(costing.result().cost_per_cup, 0.529, 0.001);
}

#[test]
fn test_scenario_dual_unit() {
    let case = CaseDescriptor::new(40.0, "each").with_secondary(50.0, "lb");
    let result = compute_dual_unit_costs(&case, 60.00, 1.0).unwrap();

    assert_float_absolute_eq!(result.primary_unit.cost_per_unit, 1.50, EPS);
    assert_float_absolute_eq!(result.secondary_unit.cost_per_unit, 1.20, EPS);
    assert_float_absolute_eq!(result.conversions.weight_per_piece, 1.25, EPS);
    assert_float_absolute_eq!(result.conversions.pieces_per_pound, 0.8, EPS);
    assert_eq!(result.secondary_unit.unit, "lb");
}

#[test]
fn test_result_serializes_with_unit_keys() {
    let result = compute_unit_costs(&CaseDescriptor::new(4.0, "gal"), 95.00, 1.0).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["costs"]["perGallon"], 23.75);
    assert_eq!(json["baseCostPerUnit"], 23.75);
    assert_eq!(json["domain"], "volume");
}
