mod import;
mod persistence;
mod store;

pub use import::{import_price_list, read_price_list, write_cost_report, write_cost_report_to};
pub use persistence::{
    load_ingredients, load_recipes, save_ingredients, save_recipes, JsonDirStore, MemoryStore,
    PersistencePort, INGREDIENTS_KEY, RECIPES_KEY,
};
pub use store::{IngredientStore, NamedStore, RecipeBook};
