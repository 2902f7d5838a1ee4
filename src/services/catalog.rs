use std::{collections::HashMap, path::Path, sync::Arc};

use crate::{
    error::{AppError, AppResult},
    models::{CatalogEntry, FilterSpec, RatingRange},
    services::query,
};

/// Seed dataset compiled into the binary
const SEED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Read-only collection of catalog entries, loaded once at startup.
///
/// Cloning is cheap; all clones share the same entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Arc<Vec<CatalogEntry>>,
    by_id: Arc<HashMap<String, usize>>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and out-of-range metrics
    pub fn new(entries: Vec<CatalogEntry>) -> AppResult<Self> {
        let mut by_id = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            validate_entry(entry)?;
            if by_id.insert(entry.id.clone(), index).is_some() {
                return Err(AppError::Catalog(format!("duplicate entry id '{}'", entry.id)));
            }
        }

        Ok(Self {
            entries: Arc::new(entries),
            by_id: Arc::new(by_id),
        })
    }

    /// Parses a JSON array of entries
    pub fn from_json(json: &str) -> AppResult<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Loads the compiled-in seed dataset
    pub fn seed() -> AppResult<Self> {
        Self::from_json(SEED_CATALOG)
    }

    /// Loads a catalog from a JSON file on disk
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), entries = catalog.len(), "Loaded catalog file");
        Ok(catalog)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by id
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.by_id.get(id).map(|&index| &self.entries[index])
    }

    /// Runs the query engine over the whole catalog
    pub fn query(&self, spec: &FilterSpec) -> Vec<&CatalogEntry> {
        query::query(self.entries.iter(), spec)
    }
}

fn validate_entry(entry: &CatalogEntry) -> AppResult<()> {
    if !(RatingRange::MIN..=RatingRange::MAX).contains(&entry.vote_average) {
        return Err(AppError::Catalog(format!(
            "entry '{}' has vote_average {} outside [0, 10]",
            entry.id, entry.vote_average
        )));
    }

    if !entry.popularity.is_finite() || entry.popularity < 0.0 {
        return Err(AppError::Catalog(format!(
            "entry '{}' has invalid popularity {}",
            entry.id, entry.popularity
        )));
    }

    Ok(())
}
