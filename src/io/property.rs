//! Recursive key/value configuration tree
//!
//! Style files are authored as JSON and converted into [`Property`] trees
//! before parsing. Objects become blocks with children in document order,
//! arrays expand into repeated keys with the same name, and every other JSON
//! value becomes a scalar leaf holding its textual form.

use log::warn;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::io::error::{Result, StyleError, file_system, invalid_config};

/// Payload of a property: a scalar string or an ordered list of children
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// Scalar value
    Leaf(String),
    /// Nested properties in document order
    Block(Vec<Property>),
}

/// A named node in the configuration tree
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    name: String,
    value: PropertyValue,
}

impl Property {
    /// Create a scalar property
    pub fn leaf(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: PropertyValue::Leaf(value.to_string()),
        }
    }

    /// Create a block property
    pub fn block(name: &str, children: Vec<Self>) -> Self {
        Self {
            name: name.to_string(),
            value: PropertyValue::Block(children),
        }
    }

    /// Name of this property
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check whether this property is a block
    pub const fn has_children(&self) -> bool {
        matches!(self.value, PropertyValue::Block(_))
    }

    /// Scalar value, `None` for blocks
    pub fn value(&self) -> Option<&str> {
        match &self.value {
            PropertyValue::Leaf(value) => Some(value),
            PropertyValue::Block(_) => None,
        }
    }

    /// Children of a block, empty for scalars
    pub fn children(&self) -> &[Self] {
        match &self.value {
            PropertyValue::Leaf(_) => &[],
            PropertyValue::Block(children) => children,
        }
    }

    /// Iterate over every child with the given name, case-insensitively
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> {
        self.children()
            .iter()
            .filter(move |child| child.name.eq_ignore_ascii_case(name))
    }

    /// Last child with the given name
    pub fn find_key(&self, name: &str) -> Option<&Self> {
        self.children()
            .iter()
            .rev()
            .find(|child| child.name.eq_ignore_ascii_case(name))
    }

    /// Scalar value of the last child with the given name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.find_key(name).and_then(Self::value)
    }

    /// Read a child as a float, falling back to `default` when absent or unparseable
    pub fn float(&self, name: &str, default: f64) -> f64 {
        let Some(raw) = self.get(name) else {
            return default;
        };
        parse_float(raw).unwrap_or_else(|| {
            warn!(
                "'{}' in '{}' is not a number: '{raw}', using {default}",
                name, self.name
            );
            default
        })
    }

    /// Read a child as a boolean, falling back to `default` when absent or unrecognised
    pub fn bool(&self, name: &str, default: bool) -> bool {
        let Some(raw) = self.get(name) else {
            return default;
        };
        parse_bool(raw).unwrap_or_else(|| {
            warn!(
                "'{}' in '{}' is not a boolean: '{raw}', using {default}",
                name, self.name
            );
            default
        })
    }

    /// Convert a JSON value into a property tree rooted at `name`
    ///
    /// # Errors
    ///
    /// Returns an error for `null` values and arrays nested directly inside arrays
    pub fn from_json(name: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => {
                let mut children = Vec::with_capacity(map.len());
                for (key, child) in map {
                    match child {
                        Value::Array(items) => {
                            for item in items {
                                if item.is_array() {
                                    return Err(invalid_config(&format!(
                                        "'{key}' contains a nested array"
                                    )));
                                }
                                children.push(Self::from_json(key, item)?);
                            }
                        }
                        _ => children.push(Self::from_json(key, child)?),
                    }
                }
                Ok(Self::block(name, children))
            }
            Value::String(text) => Ok(Self::leaf(name, text)),
            Value::Number(number) => Ok(Self::leaf(name, &number.to_string())),
            Value::Bool(flag) => Ok(Self::leaf(name, if *flag { "1" } else { "0" })),
            Value::Null => Err(invalid_config(&format!("'{name}' is null"))),
            Value::Array(_) => Err(invalid_config(&format!(
                "'{name}' is an array outside of a block"
            ))),
        }
    }

    /// Parse JSON text into a property tree rooted at `name`
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or cannot form a property tree
    pub fn from_json_str(name: &str, text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|source| invalid_config(&format!("'{name}': {source}")))?;
        Self::from_json(name, &value)
    }

    /// Load a JSON file as a property tree named after the file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid tree
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(file_system(path, "read"))?;
        let value: Value = serde_json::from_str(&text).map_err(|source| StyleError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_json(&name, &value)
    }
}

/// Lenient float conversion accepting surrounding whitespace
pub fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Boolean conversion accepting the spellings map configs commonly use
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" => Some(true),
        "0" | "false" | "f" | "no" | "n" => Some(false),
        _ => None,
    }
}
