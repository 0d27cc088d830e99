//! Map entities as ordered string key/value records
//!
//! Key lookups ignore ASCII case, matching how map compilers treat entity
//! fields (`basisNormal` and `basisnormal` name the same field).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::io::error::{Result, invalid_field};
use crate::math::rotation::Angles;
use crate::math::vector::Vec3;

/// Identifier assigned to each entity by its owning document
pub type EntityId = u32;

/// A single map entity
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Document-assigned identifier
    #[serde(default)]
    pub id: EntityId,
    /// Remaining fields, stored as raw strings
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
}

impl Entity {
    /// Create an entity of the given class with no other fields
    pub fn new(classname: &str) -> Self {
        let mut entity = Self::default();
        entity.set("classname", classname);
        entity
    }

    /// Create an entity from `(key, value)` pairs
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut entity = Self::default();
        for (key, value) in pairs {
            entity.set(key, value);
        }
        entity
    }

    fn stored_key(&self, key: &str) -> Option<&String> {
        self.fields.keys().find(|k| k.eq_ignore_ascii_case(key))
    }

    /// Raw value of a field
    pub fn get(&self, key: &str) -> Option<&str> {
        self.stored_key(key)
            .and_then(|k| self.fields.get(k))
            .map(String::as_str)
    }

    /// Check whether a field is present
    pub fn contains(&self, key: &str) -> bool {
        self.stored_key(key).is_some()
    }

    /// Set a field, keeping the existing key's spelling when present
    pub fn set(&mut self, key: &str, value: impl ToString) {
        let stored = self
            .stored_key(key)
            .cloned()
            .unwrap_or_else(|| key.to_string());
        self.fields.insert(stored, value.to_string());
    }

    /// Remove a field, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let stored = self.stored_key(key)?.clone();
        self.fields.remove(&stored)
    }

    /// The entity's class
    pub fn classname(&self) -> &str {
        self.get("classname").unwrap_or_default()
    }

    /// Iterate over `(key, value)` pairs in key order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Read a required field
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| invalid_field(self.id, key, &"", &"field is missing"))
    }

    /// Read a required field as a vector
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or not an `"x y z"` triple
    pub fn vec(&self, key: &str) -> Result<Vec3> {
        let raw = self.require(key)?;
        Vec3::parse(raw).ok_or_else(|| invalid_field(self.id, key, &raw, &"expected \"x y z\""))
    }

    /// Read a field as angles, treating an absent field as no rotation
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not a `"pitch yaw roll"` triple
    pub fn angles(&self, key: &str) -> Result<Angles> {
        match self.get(key) {
            None => Ok(Angles::default()),
            Some(raw) => Angles::parse(raw)
                .ok_or_else(|| invalid_field(self.id, key, &raw, &"expected \"pitch yaw roll\"")),
        }
    }

    /// Write a vector field in map notation
    pub fn set_vec(&mut self, key: &str, value: Vec3) {
        self.set(key, value.join());
    }
}
