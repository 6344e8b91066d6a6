//! Unit normalization and domain classification.
//!
//! Unit strings are matched by exact key equality after normalization, so
//! every accepted spelling (including plurals) lives in a lookup table in
//! [`crate::costing::constants`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::costing::constants::*;

/// Measurement domain a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitDomain {
    /// Factors are ounces per unit.
    Weight,
    /// Factors are fluid ounces per unit.
    Volume,
    /// Factors are pieces per unit.
    Count,
}

impl UnitDomain {
    /// All canonical units in this domain, in display order.
    pub fn units(&self) -> &'static [MeasureUnit] {
        match self {
            UnitDomain::Weight => &[
                MeasureUnit::Ounce,
                MeasureUnit::Pound,
                MeasureUnit::Kilogram,
                MeasureUnit::Gram,
            ],
            UnitDomain::Volume => &[
                MeasureUnit::FluidOunce,
                MeasureUnit::Teaspoon,
                MeasureUnit::Tablespoon,
                MeasureUnit::Cup,
                MeasureUnit::Pint,
                MeasureUnit::Quart,
                MeasureUnit::Gallon,
                MeasureUnit::Liter,
                MeasureUnit::Milliliter,
            ],
            UnitDomain::Count => &[MeasureUnit::Each, MeasureUnit::Dozen, MeasureUnit::Hundred],
        }
    }
}

impl fmt::Display for UnitDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitDomain::Weight => "weight",
            UnitDomain::Volume => "volume",
            UnitDomain::Count => "count",
        };
        f.write_str(name)
    }
}

/// Canonical unit a cost can be expressed per.
///
/// Serialized names are the keys of a cost mapping (`perOunce`, `perGallon`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MeasureUnit {
    #[serde(rename = "perOunce")]
    Ounce,
    #[serde(rename = "perPound")]
    Pound,
    #[serde(rename = "perKilogram")]
    Kilogram,
    #[serde(rename = "perGram")]
    Gram,
    #[serde(rename = "perFluidOunce")]
    FluidOunce,
    #[serde(rename = "perTeaspoon")]
    Teaspoon,
    #[serde(rename = "perTablespoon")]
    Tablespoon,
    #[serde(rename = "perCup")]
    Cup,
    #[serde(rename = "perPint")]
    Pint,
    #[serde(rename = "perQuart")]
    Quart,
    #[serde(rename = "perGallon")]
    Gallon,
    #[serde(rename = "perLiter")]
    Liter,
    #[serde(rename = "perMilliliter")]
    Milliliter,
    #[serde(rename = "perEach")]
    Each,
    #[serde(rename = "perDozen")]
    Dozen,
    #[serde(rename = "perHundred")]
    Hundred,
}

impl MeasureUnit {
    /// Domain this unit converts within.
    pub fn domain(&self) -> UnitDomain {
        match self {
            MeasureUnit::Ounce | MeasureUnit::Pound | MeasureUnit::Kilogram | MeasureUnit::Gram => {
                UnitDomain::Weight
            }
            MeasureUnit::Each | MeasureUnit::Dozen | MeasureUnit::Hundred => UnitDomain::Count,
            _ => UnitDomain::Volume,
        }
    }

    /// Size of one of this unit in its domain's base unit (oz, fl oz, or pieces).
    pub fn factor(&self) -> f64 {
        match self {
            MeasureUnit::Ounce => OUNCES_PER_OUNCE,
            MeasureUnit::Pound => OUNCES_PER_POUND,
            MeasureUnit::Kilogram => OUNCES_PER_KILOGRAM,
            MeasureUnit::Gram => OUNCES_PER_GRAM,
            MeasureUnit::FluidOunce => FLOZ_PER_FLUID_OUNCE,
            MeasureUnit::Teaspoon => FLOZ_PER_TEASPOON,
            MeasureUnit::Tablespoon => FLOZ_PER_TABLESPOON,
            MeasureUnit::Cup => FLOZ_PER_CUP,
            MeasureUnit::Pint => FLOZ_PER_PINT,
            MeasureUnit::Quart => FLOZ_PER_QUART,
            MeasureUnit::Gallon => FLOZ_PER_GALLON,
            MeasureUnit::Liter => FLOZ_PER_LITER,
            MeasureUnit::Milliliter => FLOZ_PER_MILLILITER,
            MeasureUnit::Each => PIECES_PER_EACH,
            MeasureUnit::Dozen => PIECES_PER_DOZEN,
            MeasureUnit::Hundred => PIECES_PER_HUNDRED,
        }
    }

    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            MeasureUnit::Ounce => "oz",
            MeasureUnit::Pound => "lb",
            MeasureUnit::Kilogram => "kg",
            MeasureUnit::Gram => "g",
            MeasureUnit::FluidOunce => "fl oz",
            MeasureUnit::Teaspoon => "tsp",
            MeasureUnit::Tablespoon => "tbsp",
            MeasureUnit::Cup => "cup",
            MeasureUnit::Pint => "pt",
            MeasureUnit::Quart => "qt",
            MeasureUnit::Gallon => "gal",
            MeasureUnit::Liter => "L",
            MeasureUnit::Milliliter => "mL",
            MeasureUnit::Each => "each",
            MeasureUnit::Dozen => "dozen",
            MeasureUnit::Hundred => "100 ct",
        }
    }
}

impl fmt::Display for MeasureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowercase and keep only letters and digits ("Fl. Oz" -> "floz", "100 ct" -> "100ct").
pub fn normalize_unit(unit: &str) -> String {
    unit.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolve a unit string to its canonical unit, if any table knows it.
pub fn resolve_unit(unit: &str) -> Option<MeasureUnit> {
    let key = normalize_unit(unit);
    if key.is_empty() {
        return None;
    }

    WEIGHT_UNITS
        .get(key.as_str())
        .or_else(|| VOLUME_UNITS.get(key.as_str()))
        .or_else(|| COUNT_UNITS.get(key.as_str()))
        .copied()
}

/// Classify a unit string into exactly one domain.
pub fn classify_unit(unit: &str) -> Option<UnitDomain> {
    resolve_unit(unit).map(|u| u.domain())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_unit() {
        assert_eq!(normalize_unit("Fl. Oz"), "floz");
        assert_eq!(normalize_unit(" LBS "), "lbs");
        assert_eq!(normalize_unit("#10 Can"), "10can");
    }

    #[test]
    fn test_classify_weight_units() {
        for unit in ["lb", "lbs", "Pound", "oz", "ounce", "kg", "g", "grams"] {
            assert_eq!(classify_unit(unit), Some(UnitDomain::Weight), "{unit}");
        }
    }

    #[test]
    fn test_classify_volume_units() {
        for unit in ["gal", "gallon", "gallons", "qt", "cup", "fl oz", "L", "mL", "tbsp"] {
            assert_eq!(classify_unit(unit), Some(UnitDomain::Volume), "{unit}");
        }
    }

    #[test]
    fn test_classify_count_units() {
        for unit in ["each", "ea", "piece", "head", "bunch", "dozen"] {
            assert_eq!(classify_unit(unit), Some(UnitDomain::Count), "{unit}");
        }
    }

    #[test]
    fn test_no_prefix_matching() {
        assert_eq!(resolve_unit("gall"), None);
        assert_eq!(resolve_unit("poun"), None);
        assert_eq!(resolve_unit("case"), None);
        assert_eq!(resolve_unit(""), None);
    }

    #[test]
    fn test_every_unit_belongs_to_its_domain() {
        for domain in [UnitDomain::Weight, UnitDomain::Volume, UnitDomain::Count] {
            for unit in domain.units() {
                assert_eq!(unit.domain(), domain);
            }
        }
    }

    #[test]
    fn test_count_packs_keep_their_size() {
        assert_eq!(resolve_unit("100 ct"), Some(MeasureUnit::Hundred));
        assert_eq!(resolve_unit("Hundred"), Some(MeasureUnit::Hundred));
        assert_eq!(resolve_unit("12 ct"), Some(MeasureUnit::Dozen));
        assert_eq!(resolve_unit("ct"), Some(MeasureUnit::Each));
        // a pack size with no table entry is unknown, not "each"
        assert_eq!(resolve_unit("24 ct"), None);
        assert_eq!(resolve_unit("#10 can"), None);
    }
}
