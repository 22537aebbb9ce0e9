//! Content library for quest lookup.
//!
//! The `ContentLibrary` stores every loaded unit in load order and
//! resolves `(unit_id, quest_id)` pairs for the notice board.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::model::{Quest, Unit};
use crate::core::{ContentError, LookupError};

/// A content document holds one unit or an array of units.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<Unit>),
    One(Unit),
}

/// Library of loaded quest content.
///
/// ## Example
///
/// ```
/// use anatomy_quest::content::ContentLibrary;
///
/// let library = ContentLibrary::from_json_str(
///     "Unit2Chapter5.json",
///     r#"{ "unit_id": "u2c5", "quests": [
///         { "quest_id": "q1", "quest_title": "Bones", "groups": [] }
///     ] }"#,
/// ).unwrap();
///
/// assert_eq!(library.find_quest("u2c5", "q1").unwrap().title, "Bones");
/// assert!(library.find_quest("u2c5", "q2").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ContentLibrary {
    units: Vec<Unit>,
    index: FxHashMap<(String, String), (usize, usize)>,
}

impl ContentLibrary {
    /// Create a new empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library from a single JSON document.
    pub fn from_json_str(origin: &str, json: &str) -> Result<Self, ContentError> {
        let mut library = Self::new();
        library.load_str(origin, json)?;
        Ok(library)
    }

    /// Load every file in order. Stops at the first failure.
    pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self, ContentError> {
        let mut library = Self::new();
        for path in paths {
            library.load_file(path)?;
        }
        info!(units = library.units.len(), quests = library.quest_count(), "Game data loaded");
        Ok(library)
    }

    /// Load one content file.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, ContentError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let file = std::fs::File::open(path).map_err(|source| ContentError::Io {
            path: origin.clone(),
            source,
        })?;
        self.load_reader(&origin, file)
    }

    /// Load a document from any reader. Returns the number of units added.
    pub fn load_reader(&mut self, origin: &str, mut reader: impl Read) -> Result<usize, ContentError> {
        let mut json = String::new();
        reader.read_to_string(&mut json).map_err(|source| ContentError::Io {
            path: origin.to_string(),
            source,
        })?;
        self.load_str(origin, &json)
    }

    /// Load a document from a string. Returns the number of units added.
    pub fn load_str(&mut self, origin: &str, json: &str) -> Result<usize, ContentError> {
        let document: Document = serde_json::from_str(json).map_err(|source| ContentError::Parse {
            origin: origin.to_string(),
            source,
        })?;

        let units = match document {
            Document::Many(units) => units,
            Document::One(unit) => vec![unit],
        };
        let count = units.len();
        for unit in units {
            self.register(unit);
        }
        debug!(origin, units = count, "Loaded content document");
        Ok(count)
    }

    /// Register a unit.
    ///
    /// When a `(unit_id, quest_id)` pair is already known the first
    /// registration keeps it.
    pub fn register(&mut self, unit: Unit) {
        let unit_index = self.units.len();
        for (quest_index, quest) in unit.quests.iter().enumerate() {
            let key = (unit.id.clone(), quest.id.clone());
            if self.index.contains_key(&key) {
                warn!(unit_id = %unit.id, quest_id = %quest.id, "Duplicate quest id ignored");
                continue;
            }
            self.index.insert(key, (unit_index, quest_index));
        }
        self.units.push(unit);
    }

    /// Look up a quest by unit and quest id.
    pub fn find_quest(&self, unit_id: &str, quest_id: &str) -> Result<&Quest, LookupError> {
        if self.units.is_empty() {
            return Err(LookupError::NoContent);
        }
        self.index
            .get(&(unit_id.to_string(), quest_id.to_string()))
            .map(|&(u, q)| &self.units[u].quests[q])
            .ok_or_else(|| LookupError::QuestNotFound {
                unit_id: unit_id.to_string(),
                quest_id: quest_id.to_string(),
            })
    }

    /// All units in load order.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Every `(unit, quest)` pair in notice-board order.
    pub fn quests(&self) -> impl Iterator<Item = (&Unit, &Quest)> {
        self.units
            .iter()
            .flat_map(|unit| unit.quests.iter().map(move |quest| (unit, quest)))
    }

    /// Number of quests across all units.
    #[must_use]
    pub fn quest_count(&self) -> usize {
        self.units.iter().map(|u| u.quests.len()).sum()
    }

    /// Check if no content has been loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
