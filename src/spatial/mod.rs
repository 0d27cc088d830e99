//! Map entities and overlay geometry
//!
//! This module contains:
//! - The string-keyed entity record
//! - The document owning every entity
//! - Overlay field names and geometry helpers

/// Entity store with JSON persistence
pub mod document;
/// String-keyed entity records
pub mod entity;
/// Overlay fields, bounds and resizing
pub mod overlay;

pub use document::MapDocument;
pub use entity::{Entity, EntityId};
