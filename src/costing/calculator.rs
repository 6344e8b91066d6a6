use std::collections::BTreeMap;

use crate::costing::units::{resolve_unit, MeasureUnit};
use crate::models::{
    CaseDescriptor, DualUnitConversions, DualUnitCostResult, UnitCostResult, UnitCostView,
};

#[inline]
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Yield factors live in (0, 1]; 1.0 means no prep loss.
#[inline]
fn is_valid_yield(yield_factor: f64) -> bool {
    is_positive(yield_factor) && yield_factor <= 1.0
}

/// Costs for every unit in `unit`'s domain, given the cost of one `unit`.
///
/// The input unit's own entry is the given cost, not a round trip through the base unit.
fn sibling_costs(unit: MeasureUnit, cost_per_unit: f64) -> BTreeMap<MeasureUnit, f64> {
    let cost_per_base = cost_per_unit / unit.factor();

    let mut costs: BTreeMap<MeasureUnit, f64> = unit
        .domain()
        .units()
        .iter()
        .map(|sibling| (*sibling, cost_per_base * sibling.factor()))
        .collect();
    costs.insert(unit, cost_per_unit);
    costs
}

/// Convert a case price into per-unit costs.
///
/// Returns None when the price, case quantity, case unit, or yield factor is
/// missing or out of range. An unrecognized unit still yields base and
/// adjusted costs, with an empty `costs` mapping.
pub fn compute_unit_costs(
    case: &CaseDescriptor,
    case_price: f64,
    yield_factor: f64,
) -> Option<UnitCostResult> {
    if !is_positive(case_price) || !case.is_valid() || !is_valid_yield(yield_factor) {
        return None;
    }

    let base_cost_per_unit = case_price / case.quantity;
    let adjusted_cost_per_unit = base_cost_per_unit / yield_factor;

    let unit = resolve_unit(&case.unit);
    if unit.is_none() {
        tracing::debug!("Unrecognized case unit '{}'; no derived costs", case.unit);
    }

    Some(UnitCostResult {
        base_cost_per_unit,
        adjusted_cost_per_unit,
        yield_factor,
        domain: unit.map(|u| u.domain()),
        costs: unit
            .map(|u| sibling_costs(u, adjusted_cost_per_unit))
            .unwrap_or_default(),
    })
}

/// Cost the same case in both of its unit systems.
///
/// Each view divides the full case price by its own quantity; the two are
/// alternative lenses on one purchase and must not be summed. Returns None
/// unless the case is dual-unit with a positive secondary quantity.
pub fn compute_dual_unit_costs(
    case: &CaseDescriptor,
    case_price: f64,
    yield_factor: f64,
) -> Option<DualUnitCostResult> {
    if !is_positive(case_price) || !case.is_valid() || !is_valid_yield(yield_factor) {
        return None;
    }
    let secondary_quantity = case.dual_quantity()?;
    let primary_quantity = case.quantity;

    Some(DualUnitCostResult {
        primary_unit: UnitCostView {
            quantity: primary_quantity,
            unit: case.unit.clone(),
            cost_per_unit: (case_price / primary_quantity) / yield_factor,
        },
        secondary_unit: UnitCostView {
            quantity: secondary_quantity,
            unit: case.secondary_unit.clone().unwrap_or_default(),
            cost_per_unit: (case_price / secondary_quantity) / yield_factor,
        },
        conversions: DualUnitConversions {
            weight_per_piece: secondary_quantity / primary_quantity,
            pieces_per_pound: primary_quantity / secondary_quantity,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costing::units::UnitDomain;

    #[test]
    fn test_weight_case() {
        let result = compute_unit_costs(&CaseDescriptor::new(40.0, "lb"), 45.0, 1.0).unwrap();
        assert_eq!(result.base_cost_per_unit, 1.125);
        assert_eq!(result.domain, Some(UnitDomain::Weight));
        assert_eq!(result.cost_per(MeasureUnit::Pound), Some(1.125));
        assert!((result.cost_per(MeasureUnit::Ounce).unwrap() - 0.0703125).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs_return_none() {
        let case = CaseDescriptor::new(40.0, "lb");
        assert!(compute_unit_costs(&case, 0.0, 1.0).is_none());
        assert!(compute_unit_costs(&case, -5.0, 1.0).is_none());
        assert!(compute_unit_costs(&case, 45.0, 0.0).is_none());
        assert!(compute_unit_costs(&case, 45.0, 1.5).is_none());
        assert!(compute_unit_costs(&CaseDescriptor::new(0.0, "lb"), 45.0, 1.0).is_none());
        assert!(compute_unit_costs(&CaseDescriptor::new(40.0, ""), 45.0, 1.0).is_none());
    }

    #[test]
    fn test_unrecognized_unit_keeps_base_costs() {
        let result = compute_unit_costs(&CaseDescriptor::new(6.0, "#10 can"), 30.0, 1.0).unwrap();
        assert!(result.is_unrecognized_unit());
        assert_eq!(result.domain, None);
        assert_eq!(result.base_cost_per_unit, 5.0);
        assert_eq!(result.adjusted_cost_per_unit, 5.0);
    }

    #[test]
    fn test_count_case() {
        let result = compute_unit_costs(&CaseDescriptor::new(24.0, "heads"), 36.0, 1.0).unwrap();
        assert_eq!(result.cost_per(MeasureUnit::Each), Some(1.5));
        assert!((result.cost_per(MeasureUnit::Dozen).unwrap() - 18.0).abs() < 1e-9);
        assert!((result.cost_per(MeasureUnit::Hundred).unwrap() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_hundred_count_case() {
        // 5 sleeves of 100 cups
        let result = compute_unit_costs(&CaseDescriptor::new(5.0, "100 ct"), 50.0, 1.0).unwrap();
        assert_eq!(result.cost_per(MeasureUnit::Hundred), Some(10.0));
        assert!((result.cost_per(MeasureUnit::Each).unwrap() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_yield_raises_adjusted_cost() {
        let case = CaseDescriptor::new(10.0, "lb");
        let result = compute_unit_costs(&case, 20.0, 0.8).unwrap();
        assert_eq!(result.base_cost_per_unit, 2.0);
        assert!((result.adjusted_cost_per_unit - 2.5).abs() < 1e-9);
        assert!((result.cost_per(MeasureUnit::Pound).unwrap() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_dual_unit_not_applicable() {
        let case = CaseDescriptor::new(40.0, "each");
        assert!(compute_dual_unit_costs(&case, 60.0, 1.0).is_none());

        let mut zero = CaseDescriptor::new(40.0, "each").with_secondary(0.0, "lb");
        assert!(compute_dual_unit_costs(&zero, 60.0, 1.0).is_none());
        zero.secondary_quantity = None;
        assert!(compute_dual_unit_costs(&zero, 60.0, 1.0).is_none());
    }

    #[test]
    fn test_dual_unit_yield_applies_to_both_views() {
        let case = CaseDescriptor::new(40.0, "each").with_secondary(50.0, "lb");
        let result = compute_dual_unit_costs(&case, 60.0, 0.5).unwrap();
        assert!((result.primary_unit.cost_per_unit - 3.0).abs() < 1e-9);
        assert!((result.secondary_unit.cost_per_unit - 2.4).abs() < 1e-9);
    }
}
