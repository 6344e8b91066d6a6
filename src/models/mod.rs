mod case;
mod costs;
mod ingredient;
mod recipe;

pub use case::CaseDescriptor;
pub use costs::{
    DualUnitConversions, DualUnitCostResult, IngredientCostRecord, UnitCostResult, UnitCostView,
    VolumeConversionResult,
};
pub use ingredient::{Category, Ingredient};
pub use recipe::{LineCost, Recipe, RecipeCost, RecipeLine};

/// Records stored and looked up by a case-insensitive name.
pub trait Named {
    fn name(&self) -> &str;

    /// Canonical key for lookups (lowercase, trimmed name).
    fn key(&self) -> String {
        self.name().trim().to_lowercase()
    }
}
