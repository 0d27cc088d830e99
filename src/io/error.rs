//! Error types for style parsing, overlay styling and map I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all styling operations
#[derive(Debug)]
pub enum StyleError {
    /// Overlay material is neither the straight nor the corner antline texture
    UnrecognizedMaterial {
        /// Material found on the overlay
        material: String,
    },

    /// Compact `scale|texture|flags` value could not be split into one texture
    MalformedTexture {
        /// The full value that failed to parse
        value: String,
        /// Index of the `|`-separated field at fault
        position: usize,
        /// Explanation of what is wrong with the field
        reason: String,
    },

    /// Required key absent from a configuration block
    MissingKey {
        /// Name of the block being parsed
        block: String,
        /// Key that was expected
        key: &'static str,
    },

    /// A texture had to be chosen from a style list with no entries
    EmptyTextureList {
        /// Shape of the antline being styled
        shape: &'static str,
        /// Whether the broken variant list was requested
        broken: bool,
    },

    /// Entity field is missing or holds an unusable value
    InvalidField {
        /// Identifier of the entity carrying the field
        entity: u32,
        /// Field name
        key: String,
        /// Raw value, empty when the key is absent
        value: String,
        /// Explanation of why the value is unusable
        reason: String,
    },

    /// Entity id not present in the document
    MissingEntity {
        /// The id that was looked up
        id: u32,
    },

    /// Configuration source cannot be represented as a property tree
    InvalidConfig {
        /// Description of the unsupported shape
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// JSON (de)serialization failure
    Json {
        /// File being read or written
        path: PathBuf,
        /// Underlying serde error
        source: serde_json::Error,
    },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedMaterial { material } => {
                write!(f, "\"{material}\" is not an antline material")
            }
            Self::MalformedTexture {
                value,
                position,
                reason,
            } => {
                write!(
                    f,
                    "Malformed texture value '{value}' at field {position}: {reason}"
                )
            }
            Self::MissingKey { block, key } => {
                write!(f, "Block '{block}' is missing required key '{key}'")
            }
            Self::EmptyTextureList { shape, broken } => {
                let variant = if *broken { "broken " } else { "" };
                write!(f, "No {variant}{shape} textures are configured")
            }
            Self::InvalidField {
                entity,
                key,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Entity {entity} has invalid field '{key}' = '{value}': {reason}"
                )
            }
            Self::MissingEntity { id } => {
                write!(f, "Entity {id} does not exist in the document")
            }
            Self::InvalidConfig { reason } => {
                write!(f, "Invalid configuration: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Json { path, source } => {
                write!(f, "Invalid JSON in '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for styling results
pub type Result<T> = std::result::Result<T, StyleError>;

/// Create an invalid field error
pub fn invalid_field(
    entity: u32,
    key: &str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StyleError {
    StyleError::InvalidField {
        entity,
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed texture error
pub fn malformed_texture(value: &str, position: usize, reason: &impl ToString) -> StyleError {
    StyleError::MalformedTexture {
        value: value.to_string(),
        position,
        reason: reason.to_string(),
    }
}

/// Create an invalid configuration error
pub fn invalid_config(reason: &impl ToString) -> StyleError {
    StyleError::InvalidConfig {
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to an I/O error
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> StyleError {
    let path = path.into();
    move |source| StyleError::FileSystem {
        path,
        operation,
        source,
    }
}
