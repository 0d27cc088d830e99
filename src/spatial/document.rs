//! Entity store owning every entity of a map
//!
//! The styling pass borrows the document mutably for the duration of one
//! overlay and goes through [`MapDocument::insert`] and [`MapDocument::remove`]
//! for every structural change. Callers iterate over an id snapshot taken
//! beforehand, never over the live store.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::io::error::{Result, StyleError, file_system};
use crate::spatial::entity::{Entity, EntityId};

/// On-disk layout of a map document
#[derive(Serialize, Deserialize)]
struct DocumentFile {
    entities: Vec<Entity>,
}

/// Mutable collection of map entities keyed by id
#[derive(Clone, Debug, Default)]
pub struct MapDocument {
    entities: BTreeMap<EntityId, Entity>,
    next_id: EntityId,
}

impl MapDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from entities, assigning fresh ids where missing or duplicated
    pub fn from_entities(entities: impl IntoIterator<Item = Entity>) -> Self {
        let mut document = Self::new();
        for entity in entities {
            document.insert(entity);
        }
        document
    }

    /// Add an entity, returning the id it is stored under
    ///
    /// The entity keeps its own id when that id is nonzero and unused.
    pub fn insert(&mut self, mut entity: Entity) -> EntityId {
        if entity.id == 0 || self.entities.contains_key(&entity.id) {
            entity.id = self.allocate_id();
        }
        let id = entity.id;
        self.next_id = self.next_id.max(id);
        self.entities.insert(id, entity);
        id
    }

    /// Next id above every id seen, or the lowest free id once the top is taken
    fn allocate_id(&mut self) -> EntityId {
        if let Some(id) = self.next_id.checked_add(1) {
            self.next_id = id;
            return id;
        }
        // A document cannot hold u32::MAX entities, so a gap always exists
        (1..EntityId::MAX)
            .find(|id| !self.entities.contains_key(id))
            .unwrap_or_default()
    }

    /// Remove an entity from the document
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    /// Look up an entity
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Look up an entity for modification
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Look up an entity that must exist
    ///
    /// # Errors
    ///
    /// Returns an error if no entity has this id
    pub fn require(&self, id: EntityId) -> Result<&Entity> {
        self.get(id).ok_or(StyleError::MissingEntity { id })
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check whether the document has no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over entities in id order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Snapshot of the ids of every entity with the given class
    pub fn ids_by_class(&self, classname: &str) -> Vec<EntityId> {
        self.entities
            .values()
            .filter(|e| e.classname().eq_ignore_ascii_case(classname))
            .map(|e| e.id)
            .collect()
    }

    /// Parse a document from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid document
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let file: DocumentFile = serde_json::from_str(text)?;
        Ok(Self::from_entities(file.entities))
    }

    /// Serialize the document to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> serde_json::Result<String> {
        let file = DocumentFile {
            entities: self.entities.values().cloned().collect(),
        };
        serde_json::to_string_pretty(&file)
    }

    /// Load a document from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(file_system(path, "read"))?;
        let document = Self::from_json(&text).map_err(|source| StyleError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "Loaded {} entities from {}",
            document.len(),
            path.display()
        );
        Ok(document)
    }

    /// Write the document to a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_json().map_err(|source| StyleError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, text).map_err(file_system(path, "write"))?;
        debug!("Wrote {} entities to {}", self.len(), path.display());
        Ok(())
    }
}
