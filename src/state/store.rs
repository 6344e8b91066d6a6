use std::collections::HashMap;

use crate::error::{CostError, Result};
use crate::models::{Ingredient, Named, Recipe};

/// Records keyed by case-insensitive name, owned by whoever builds it.
#[derive(Debug, Clone)]
pub struct NamedStore<T> {
    entries: HashMap<String, T>,
}

pub type IngredientStore = NamedStore<Ingredient>;
pub type RecipeBook = NamedStore<Recipe>;

impl<T: Named> Default for NamedStore<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Named> NamedStore<T> {
    /// Build a store from records; later duplicates replace earlier ones.
    pub fn new(records: Vec<T>) -> Self {
        let entries = records.into_iter().map(|r| (r.key(), r)).collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(&name.trim().to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Insert a new record; fails if the name is taken.
    pub fn add(&mut self, record: T) -> Result<()> {
        let key = record.key();
        if key.is_empty() {
            return Err(CostError::InvalidInput("Name must not be empty".to_string()));
        }
        if self.entries.contains_key(&key) {
            return Err(CostError::Duplicate(record.name().to_string()));
        }

        tracing::debug!("Adding '{}'", record.name());
        self.entries.insert(key, record);
        Ok(())
    }

    /// Replace an existing record, returning the previous one.
    pub fn update(&mut self, record: T) -> Result<T> {
        let key = record.key();
        let slot = self
            .entries
            .get_mut(&key)
            .ok_or_else(|| CostError::NotFound(record.name().to_string()))?;

        tracing::debug!("Updating '{}'", record.name());
        Ok(std::mem::replace(slot, record))
    }

    /// Insert or replace, returning the previous record if any.
    pub fn upsert(&mut self, record: T) -> Option<T> {
        self.entries.insert(record.key(), record)
    }

    pub fn remove(&mut self, name: &str) -> Result<T> {
        let removed = self
            .entries
            .remove(&name.trim().to_lowercase())
            .ok_or_else(|| CostError::NotFound(name.to_string()))?;

        tracing::debug!("Removed '{}'", removed.name());
        Ok(removed)
    }

    /// Record names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|r| r.name())
    }

    /// All records sorted by name.
    pub fn all(&self) -> Vec<&T> {
        let mut records: Vec<&T> = self.entries.values().collect();
        records.sort_by_key(|r| r.key());
        records
    }

    /// Records sorted by name, for serialization.
    pub fn to_records(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.all().into_iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
