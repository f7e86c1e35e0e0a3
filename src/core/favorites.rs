use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Storage capability for the persisted favorites set, so the manager can be
/// tested without a real backing file.
pub trait FavoritesStorage {
    fn load(&self) -> anyhow::Result<BTreeSet<String>>;
    fn save(&self, favorites: &BTreeSet<String>) -> anyhow::Result<()>;
}

/// Favorites persisted as a single JSON array of recipe ids at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Platform-default location, e.g. `~/.local/share/recipebook/favorites.json`.
    pub fn default_location() -> anyhow::Result<Self> {
        let base =
            dirs::data_local_dir().context("Could not determine the platform data directory")?;
        Ok(Self {
            path: base.join("recipebook").join("favorites.json"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesStorage for JsonFileStorage {
    fn load(&self) -> anyhow::Result<BTreeSet<String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read favorites file {:?}", self.path));
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => Ok(ids.into_iter().collect()),
            Err(err) => {
                tracing::warn!("Ignoring malformed favorites file {:?}: {}", self.path, err);
                Ok(BTreeSet::new())
            }
        }
    }

    fn save(&self, favorites: &BTreeSet<String>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create favorites directory {:?}", parent))?;
        }
        let ids: Vec<&str> = favorites.iter().map(String::as_str).collect();
        let encoded = serde_json::to_string(&ids)?;
        fs::write(&self.path, encoded)
            .with_context(|| format!("Failed to write favorites file {:?}", self.path))?;
        Ok(())
    }
}

/// Whether a toggle added or removed the id, decided by membership before the
/// toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// The favorites set plus its storage. Loaded once at startup; every toggle
/// rewrites the whole persisted value.
#[derive(Debug, Clone)]
pub struct FavoritesBook<S> {
    storage: S,
    ids: BTreeSet<String>,
}

impl<S: FavoritesStorage> FavoritesBook<S> {
    /// Load the persisted set. Absent or unreadable data yields an empty set,
    /// never an error.
    pub fn open(storage: S) -> Self {
        let ids = storage.load().unwrap_or_else(|err| {
            tracing::warn!("Failed to load favorites, starting empty: {:#}", err);
            BTreeSet::new()
        });
        Self { storage, ids }
    }

    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        let outcome = if self.ids.remove(id) {
            ToggleOutcome::Removed
        } else {
            self.ids.insert(id.to_string());
            ToggleOutcome::Added
        };
        // A failed write is not fatal; the in-memory set stays authoritative
        // for the rest of the run.
        if let Err(err) = self.storage.save(&self.ids) {
            tracing::warn!("Failed to persist favorites: {:#}", err);
        }
        outcome
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &BTreeSet<String> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
