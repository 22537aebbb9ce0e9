//! Save storage for the hero.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::player::Character;
use crate::core::StoreError;

/// Where the hero is saved between sessions.
///
/// Saves are the character serialized as JSON.
pub trait CharacterStore {
    /// Load the saved hero. `Ok(None)` if nothing was saved yet.
    fn load(&self) -> Result<Option<Character>, StoreError>;

    /// Overwrite the save.
    fn save(&mut self, hero: &Character) -> Result<(), StoreError>;
}

/// In-memory save slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing save blob.
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self { blob: Some(blob.into()) }
    }

    /// The raw saved JSON.
    #[must_use]
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl CharacterStore for MemoryStore {
    fn load(&self) -> Result<Option<Character>, StoreError> {
        self.blob
            .as_deref()
            .map(serde_json::from_str::<Character>)
            .transpose()
            .map_err(StoreError::from)
    }

    fn save(&mut self, hero: &Character) -> Result<(), StoreError> {
        self.blob = Some(serde_json::to_string(hero)?);
        Ok(())
    }
}

/// Save file on disk.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CharacterStore for FileStore {
    fn load(&self) -> Result<Option<Character>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => {
                debug!(path = %self.path.display(), "Loaded save");
                Ok(Some(serde_json::from_str(&json)?))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, hero: &Character) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(hero)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "Saved hero");
        Ok(())
    }
}
