//! Deterministic restyling of antline overlay decals
//!
//! Antlines are strips of overlay decals connecting interactive items across
//! a level's surfaces. This crate retextures them from a configurable style,
//! and for styles with a breakage chance cuts long strips into alternating
//! runs of broken and intact overlays. Every random choice is seeded from the
//! overlay's position, so restyling the same map always gives the same result.

#![forbid(unsafe_code)]

/// Antline classification, run-length fragmentation and restyling
pub mod antline;
/// Configuration, errors, progress display and the command-line front end
pub mod io;
/// Vector and rotation utilities for entity geometry
pub mod math;
/// Map entities, the document that owns them and overlay geometry
pub mod spatial;
/// Texture entries and antline styles
pub mod style;

pub use antline::segmenter::{StyleOutcome, style_antline};
pub use io::error::{Result, StyleError};
pub use style::definition::StyleDefinition;
pub use style::texture::TextureEntry;
