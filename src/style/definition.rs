//! Antline styles: the texture lists for each shape and the breakage odds

use log::debug;
use std::path::Path;

use crate::io::configuration::{
    ANTLINE_CORNER, ANTLINE_STRAIGHT, DEFAULT_CORNER_SCALE, DEFAULT_TEXTURE_SCALE,
    FLOOR_STYLE_KEY, WALL_STYLE_KEY,
};
use crate::io::error::{Result, StyleError};
use crate::io::property::Property;
use crate::style::texture::TextureEntry;

/// Shape of an antline overlay, determined by its base material
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AntlineShape {
    /// Straight strip segment
    Straight,
    /// Corner piece joining two strips
    Corner,
}

impl AntlineShape {
    /// Classify an overlay from its current material
    ///
    /// # Errors
    ///
    /// Returns an error if the material is not one of the antline base textures
    pub fn from_material(material: &str) -> Result<Self> {
        if material == ANTLINE_STRAIGHT {
            Ok(Self::Straight)
        } else if material == ANTLINE_CORNER {
            Ok(Self::Corner)
        } else {
            Err(StyleError::UnrecognizedMaterial {
                material: material.to_string(),
            })
        }
    }

    /// Lowercase name used in configuration and messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::Corner => "corner",
        }
    }
}

/// Texture lists and breakage probability making up one antline style
///
/// A style with a zero `broken_chance` never holds broken textures, whatever
/// the configuration supplied.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleDefinition {
    straight: Vec<TextureEntry>,
    corner: Vec<TextureEntry>,
    broken_straight: Vec<TextureEntry>,
    broken_corner: Vec<TextureEntry>,
    broken_chance: f64,
}

impl StyleDefinition {
    /// Create a style, discarding broken lists when `broken_chance` is zero
    pub fn new(
        straight: Vec<TextureEntry>,
        corner: Vec<TextureEntry>,
        broken_straight: Vec<TextureEntry>,
        broken_corner: Vec<TextureEntry>,
        broken_chance: f64,
    ) -> Self {
        let (broken_straight, broken_corner) = if broken_chance == 0.0 {
            (Vec::new(), Vec::new())
        } else {
            (broken_straight, broken_corner)
        };

        Self {
            straight,
            corner,
            broken_straight,
            broken_corner,
            broken_chance,
        }
    }

    /// Parse a style from a configuration block
    ///
    /// Entries are collected from every `straight`, `corner`,
    /// `broken_straight` and `broken_corner` child in document order. Other
    /// children are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if any texture entry fails to parse
    pub fn parse(prop: &Property) -> Result<Self> {
        let broken_chance = prop.float("broken_chance", 0.0);

        let collect = |name: &str| -> Result<Vec<TextureEntry>> {
            prop.find_all(name).map(TextureEntry::parse).collect()
        };

        let style = Self::new(
            collect("straight")?,
            collect("corner")?,
            collect("broken_straight")?,
            collect("broken_corner")?,
            broken_chance,
        );
        debug!(
            "Parsed style '{}': {} straight, {} corner, {} broken straight, {} broken corner, {}% broken",
            prop.name(),
            style.straight.len(),
            style.corner.len(),
            style.broken_straight.len(),
            style.broken_corner.len(),
            style.broken_chance
        );
        Ok(style)
    }

    /// Percentage chance for each cell of an antline to be broken
    pub const fn broken_chance(&self) -> f64 {
        self.broken_chance
    }

    /// Texture list for a shape, intact or broken
    pub fn textures(&self, shape: AntlineShape, broken: bool) -> &[TextureEntry] {
        match (shape, broken) {
            (AntlineShape::Straight, false) => &self.straight,
            (AntlineShape::Corner, false) => &self.corner,
            (AntlineShape::Straight, true) => &self.broken_straight,
            (AntlineShape::Corner, true) => &self.broken_corner,
        }
    }
}

impl Default for StyleDefinition {
    /// The editor's own look: the base textures, never broken
    fn default() -> Self {
        Self::new(
            vec![TextureEntry::new(
                ANTLINE_STRAIGHT,
                DEFAULT_TEXTURE_SCALE,
                false,
            )],
            vec![TextureEntry::new(ANTLINE_CORNER, DEFAULT_CORNER_SCALE, false)],
            Vec::new(),
            Vec::new(),
            0.0,
        )
    }
}

/// Wall style plus an optional alternate for floors and ceilings
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSet {
    /// Style for overlays on walls
    pub wall: StyleDefinition,
    /// Style for overlays on floors and ceilings
    pub floor: Option<StyleDefinition>,
}

impl StyleSet {
    /// Parse a style set from the root of a style file
    ///
    /// A root with a `wall` block takes that block as the wall style and an
    /// optional `floor` block. Any other root is a single style used everywhere.
    ///
    /// # Errors
    ///
    /// Returns an error if any style block fails to parse
    pub fn parse(root: &Property) -> Result<Self> {
        let Some(wall) = root.find_key(WALL_STYLE_KEY) else {
            return Ok(Self {
                wall: StyleDefinition::parse(root)?,
                floor: None,
            });
        };

        let floor = root
            .find_key(FLOOR_STYLE_KEY)
            .map(StyleDefinition::parse)
            .transpose()?;

        Ok(Self {
            wall: StyleDefinition::parse(wall)?,
            floor,
        })
    }

    /// Load a style set from a JSON style file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds an invalid style
    pub fn load(path: &Path) -> Result<Self> {
        Self::parse(&Property::load(path)?)
    }
}
