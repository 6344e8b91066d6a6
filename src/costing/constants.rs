use std::collections::HashMap;
use std::sync::LazyLock;

use crate::costing::units::MeasureUnit;
use crate::models::Category;

/// Yield factor that applies no prep-loss adjustment.
pub const DEFAULT_YIELD_FACTOR: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Weight factors (ounces per unit)
// ─────────────────────────────────────────────────────────────────────────────

pub const OUNCES_PER_OUNCE: f64 = 1.0;
pub const OUNCES_PER_POUND: f64 = 16.0;
pub const OUNCES_PER_KILOGRAM: f64 = 35.274;
pub const OUNCES_PER_GRAM: f64 = 0.035274;

// ─────────────────────────────────────────────────────────────────────────────
// Volume factors (fluid ounces per unit)
// ─────────────────────────────────────────────────────────────────────────────

pub const FLOZ_PER_FLUID_OUNCE: f64 = 1.0;
pub const FLOZ_PER_TEASPOON: f64 = 1.0 / 6.0;
pub const FLOZ_PER_TABLESPOON: f64 = 0.5;
pub const FLOZ_PER_CUP: f64 = 8.0;
pub const FLOZ_PER_PINT: f64 = 16.0;
pub const FLOZ_PER_QUART: f64 = 32.0;
pub const FLOZ_PER_GALLON: f64 = 128.0;
pub const FLOZ_PER_LITER: f64 = 33.814;
pub const FLOZ_PER_MILLILITER: f64 = 0.033814;

// ─────────────────────────────────────────────────────────────────────────────
// Count factors (pieces per unit)
// ─────────────────────────────────────────────────────────────────────────────

pub const PIECES_PER_EACH: f64 = 1.0;
pub const PIECES_PER_DOZEN: f64 = 12.0;
pub const PIECES_PER_HUNDRED: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Density
// ─────────────────────────────────────────────────────────────────────────────

/// Grams in one avoirdupois pound, as used for cups-per-pound.
pub const GRAMS_PER_POUND: f64 = 453.6;

/// Tablespoons and teaspoons per US cup.
pub const TBSP_PER_CUP: f64 = 16.0;
pub const TSP_PER_CUP: f64 = 48.0;

/// Density key used when an ingredient type has no table entry.
pub const DEFAULT_DENSITY_KEY: &str = "flour";

/// Grams per cup for dry weight-based ingredients, keyed by normalized name.
pub static GRAMS_PER_CUP: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("flour", 120.0);
    m.insert("sugar", 200.0);
    m.insert("brownsugar", 220.0);
    m.insert("salt", 288.0);
    m.insert("rice", 185.0);
    m.insert("oats", 90.0);
    m.insert("cocoa", 85.0);
    m
});

// ─────────────────────────────────────────────────────────────────────────────
// Unit lookup tables (normalized key -> canonical unit)
// ─────────────────────────────────────────────────────────────────────────────

/// Weight unit spellings. Plurals are listed explicitly.
pub static WEIGHT_UNITS: LazyLock<HashMap<&'static str, MeasureUnit>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for key in ["oz", "ozs", "ounce", "ounces"] {
        m.insert(key, MeasureUnit::Ounce);
    }
    for key in ["lb", "lbs", "pound", "pounds"] {
        m.insert(key, MeasureUnit::Pound);
    }
    for key in ["kg", "kgs", "kilo", "kilos", "kilogram", "kilograms"] {
        m.insert(key, MeasureUnit::Kilogram);
    }
    for key in ["g", "gr", "gram", "grams"] {
        m.insert(key, MeasureUnit::Gram);
    }
    m
});

/// Volume unit spellings. "fl oz" normalizes to "floz".
pub static VOLUME_UNITS: LazyLock<HashMap<&'static str, MeasureUnit>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for key in ["floz", "fluidounce", "fluidounces"] {
        m.insert(key, MeasureUnit::FluidOunce);
    }
    for key in ["tsp", "tsps", "teaspoon", "teaspoons"] {
        m.insert(key, MeasureUnit::Teaspoon);
    }
    for key in ["tbsp", "tbsps", "tablespoon", "tablespoons"] {
        m.insert(key, MeasureUnit::Tablespoon);
    }
    for key in ["c", "cup", "cups"] {
        m.insert(key, MeasureUnit::Cup);
    }
    for key in ["pt", "pts", "pint", "pints"] {
        m.insert(key, MeasureUnit::Pint);
    }
    for key in ["qt", "qts", "quart", "quarts"] {
        m.insert(key, MeasureUnit::Quart);
    }
    for key in ["gal", "gals", "gallon", "gallons"] {
        m.insert(key, MeasureUnit::Gallon);
    }
    for key in ["l", "liter", "liters", "litre", "litres"] {
        m.insert(key, MeasureUnit::Liter);
    }
    for key in ["ml", "milliliter", "milliliters", "millilitre", "millilitres"] {
        m.insert(key, MeasureUnit::Milliliter);
    }
    m
});

/// Count unit spellings.
pub static COUNT_UNITS: LazyLock<HashMap<&'static str, MeasureUnit>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for key in [
        "each", "ea", "piece", "pieces", "pc", "pcs", "head", "heads", "bunch", "bunches",
        "count", "ct", "item", "items",
    ] {
        m.insert(key, MeasureUnit::Each);
    }
    for key in ["dozen", "dozens", "dz", "doz", "12ct", "12count"] {
        m.insert(key, MeasureUnit::Dozen);
    }
    for key in ["hundred", "hundreds", "100ct", "100count", "100pc", "100pcs"] {
        m.insert(key, MeasureUnit::Hundred);
    }
    m
});

// ─────────────────────────────────────────────────────────────────────────────
// Category defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Default (trim loss %, cooking loss %) applied when an ingredient has none recorded.
pub static CATEGORY_LOSSES: LazyLock<HashMap<Category, (f64, f64)>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(Category::Produce, (15.0, 0.0));
    m.insert(Category::Meat, (10.0, 25.0));
    m.insert(Category::Poultry, (15.0, 25.0));
    m.insert(Category::Seafood, (20.0, 15.0));
    m.insert(Category::Dairy, (0.0, 0.0));
    m.insert(Category::DryGoods, (0.0, 0.0));
    m.insert(Category::Bakery, (2.0, 0.0));
    m.insert(Category::Beverage, (0.0, 0.0));
    m.insert(Category::Other, (0.0, 0.0));
    m
});

/// Default losses for a category.
pub fn category_losses(category: Category) -> (f64, f64) {
    CATEGORY_LOSSES
        .get(&category)
        .copied()
        .unwrap_or((0.0, 0.0))
}
