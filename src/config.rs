use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::costing::constants::DEFAULT_YIELD_FACTOR;
use crate::error::{CostError, Result};
use crate::matching::{JaroWinkler, NameMatcher, DEFAULT_MATCH_THRESHOLD};

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "CULINARY_COST_DATA_DIR";

pub const DEFAULT_DATA_DIR: &str = "kitchen_data";

/// Runtime settings; every field has a default so partial JSON files work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostingConfig {
    /// Directory holding ingredients.json and recipes.json.
    pub data_dir: PathBuf,

    /// Yield factor used when a command does not give one.
    pub default_yield_factor: f64,

    /// Minimum score for linking a recipe line to an ingredient.
    pub match_threshold: f64,

    /// Add a Jaro-Winkler tier after token overlap to catch typos.
    pub fuzzy_typos: bool,
}

impl Default for CostingConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            default_yield_factor: DEFAULT_YIELD_FACTOR,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            fuzzy_typos: false,
        }
    }
}

impl CostingConfig {
    /// Read a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CostingConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply a data directory override (normally from [`DATA_DIR_ENV`]).
    pub fn with_data_dir_override(mut self, data_dir: Option<String>) -> Self {
        if let Some(dir) = data_dir.filter(|d| !d.trim().is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        self
    }

    /// Apply [`DATA_DIR_ENV`] if set.
    pub fn with_env(self) -> Self {
        self.with_data_dir_override(std::env::var(DATA_DIR_ENV).ok())
    }

    pub fn validate(&self) -> Result<()> {
        let y = self.default_yield_factor;
        if !(y.is_finite() && y > 0.0 && y <= 1.0) {
            return Err(CostError::InvalidInput(format!(
                "default_yield_factor must be in (0, 1], got {}",
                y
            )));
        }
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(CostError::InvalidInput(format!(
                "match_threshold must be in [0, 1], got {}",
                self.match_threshold
            )));
        }
        Ok(())
    }

    /// Name matcher built from these settings.
    pub fn matcher(&self) -> NameMatcher {
        let matcher = NameMatcher::new(self.match_threshold);
        if self.fuzzy_typos {
            matcher.with_strategy(Box::new(JaroWinkler))
        } else {
            matcher
        }
    }
}
