//! Style configuration parsed from property trees

/// Styles and style sets
pub mod definition;
/// Single texture entries
pub mod texture;

pub use definition::{AntlineShape, StyleDefinition, StyleSet};
pub use texture::TextureEntry;
