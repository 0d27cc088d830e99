//! A single antline texture and how it is written onto an overlay

use log::warn;

use crate::io::configuration::DEFAULT_TEXTURE_SCALE;
use crate::io::error::{Result, StyleError, malformed_texture};
use crate::io::property::{Property, parse_float};
use crate::spatial::entity::Entity;
use crate::spatial::overlay::{MATERIAL, TARGETNAME, TEXTURE_SCALE};

/// Separator between the fields of the compact texture form
const FIELD_SEPARATOR: char = '|';
/// Flag marking a texture that is never toggled at runtime
const STATIC_FLAG: &str = "static";

/// Texture applied to an antline overlay
#[derive(Clone, Debug, PartialEq)]
pub struct TextureEntry {
    /// Material path
    pub texture: String,
    /// Texture scale along the strip
    pub scale: f64,
    /// Static decals lose their toggle name when applied
    pub is_static: bool,
}

impl TextureEntry {
    /// Create an entry
    pub fn new(texture: &str, scale: f64, is_static: bool) -> Self {
        Self {
            texture: texture.to_string(),
            scale,
            is_static,
        }
    }

    /// Parse an entry from a configuration property
    ///
    /// Scalars take the compact `material`, `scale|material` or
    /// `scale|material|flag|...` forms. Blocks use the `tex`, `scale` and
    /// `static` keys.
    ///
    /// # Errors
    ///
    /// Returns an error if a block has no `tex` key or a scalar has no texture field
    pub fn parse(prop: &Property) -> Result<Self> {
        match prop.value() {
            None => Self::parse_block(prop),
            Some(value) => Self::parse_compact(value),
        }
    }

    fn parse_block(prop: &Property) -> Result<Self> {
        let texture = prop.get("tex").ok_or_else(|| StyleError::MissingKey {
            block: prop.name().to_string(),
            key: "tex",
        })?;
        Ok(Self::new(
            texture,
            prop.float("scale", DEFAULT_TEXTURE_SCALE),
            prop.bool(STATIC_FLAG, false),
        ))
    }

    fn parse_compact(value: &str) -> Result<Self> {
        let fields: Vec<&str> = value.split(FIELD_SEPARATOR).collect();

        let (scale_field, texture_position, flags) = match fields.as_slice() {
            [] | [_] => (None, 0, &[][..]),
            [scale, _, flags @ ..] => (Some(*scale), 1, flags),
        };

        let texture = fields
            .get(texture_position)
            .map(|field| field.trim())
            .filter(|field| !field.is_empty())
            .ok_or_else(|| malformed_texture(value, texture_position, &"texture name is empty"))?;

        let scale = scale_field.map_or(DEFAULT_TEXTURE_SCALE, |raw| {
            parse_float(raw).unwrap_or_else(|| {
                warn!("Texture scale '{raw}' in '{value}' is not a number, using default");
                DEFAULT_TEXTURE_SCALE
            })
        });
        let is_static = flags.iter().any(|flag| flag.trim() == STATIC_FLAG);

        Ok(Self::new(texture, scale, is_static))
    }

    /// Write this texture onto an overlay
    pub fn apply(&self, overlay: &mut Entity) {
        overlay.set(MATERIAL, &self.texture);
        overlay.set(TEXTURE_SCALE, self.scale);
        if self.is_static {
            overlay.remove(TARGETNAME);
        }
    }
}
