pub mod cli;
pub mod config;
pub mod costing;
pub mod error;
pub mod interface;
pub mod matching;
pub mod models;
pub mod state;

pub use config::CostingConfig;
pub use error::{CostError, Result};
pub use models::{CaseDescriptor, Ingredient, Recipe};
