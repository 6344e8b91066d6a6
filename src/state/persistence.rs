use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::models::{Ingredient, Named, Recipe};

pub const INGREDIENTS_KEY: &str = "ingredients";
pub const RECIPES_KEY: &str = "recipes";

/// Load and save raw documents by key.
pub trait PersistencePort {
    /// None when nothing has been saved under `key`.
    fn load(&self, key: &str) -> Result<Option<String>>;

    fn save(&self, key: &str, contents: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl PersistencePort for JsonDirStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        fs::write(&path, contents)?;
        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }
}

/// In-memory documents, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistencePort for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.documents.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, contents: &str) -> Result<()> {
        self.documents
            .borrow_mut()
            .insert(key.to_string(), contents.to_string());
        Ok(())
    }
}

/// Deduplicate by lowercase name (last occurrence wins), sorted by name.
fn dedupe<T: Named>(records: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen: BTreeMap<String, T> = BTreeMap::new();
    for record in records {
        seen.insert(record.key(), record);
    }
    seen.into_values().collect()
}

fn load_records<T, P>(port: &P, key: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned + Named,
    P: PersistencePort + ?Sized,
{
    let Some(content) = port.load(key)? else {
        tracing::debug!("Nothing stored under '{}'", key);
        return Ok(Vec::new());
    };

    let records: Vec<T> = serde_json::from_str(&content)?;
    Ok(dedupe(records))
}

fn save_records<T, P>(port: &P, key: &str, records: &[T]) -> Result<()>
where
    T: Serialize + Named,
    P: PersistencePort + ?Sized,
{
    let deduped = dedupe(records.iter().map(Keyed));
    let json = serde_json::to_string_pretty(&deduped)?;
    port.save(key, &json)
}

/// Borrowed record that dedupes and serializes like the record itself.
#[derive(Serialize)]
#[serde(transparent)]
struct Keyed<'a, T: Serialize>(&'a T);

impl<T: Serialize + Named> Named for Keyed<'_, T> {
    fn name(&self) -> &str {
        self.0.name()
    }
}

pub fn load_ingredients<P: PersistencePort + ?Sized>(port: &P) -> Result<Vec<Ingredient>> {
    load_records(port, INGREDIENTS_KEY)
}

pub fn save_ingredients<P: PersistencePort + ?Sized>(port: &P, ingredients: &[Ingredient]) -> Result<()> {
    save_records(port, INGREDIENTS_KEY, ingredients)
}

pub fn load_recipes<P: PersistencePort + ?Sized>(port: &P) -> Result<Vec<Recipe>> {
    load_records(port, RECIPES_KEY)
}

pub fn save_recipes<P: PersistencePort + ?Sized>(port: &P, recipes: &[Recipe]) -> Result<()> {
    save_records(port, RECIPES_KEY, recipes)
}
