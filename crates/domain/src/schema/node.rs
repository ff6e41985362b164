//! Structural schema document model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A schema document could not be parsed into a [`SchemaNode`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid schema document: {message}")]
pub struct SchemaParseError {
    /// Parser error detail.
    pub message: String,
}

/// JSON value types a schema can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// JSON object
    Object,
    /// JSON array
    Array,
    /// JSON string
    String,
    /// Whole number (no fractional part)
    Integer,
    /// Any JSON number
    Number,
    /// JSON boolean
    Boolean,
    /// JSON null
    Null,
}

impl SchemaType {
    /// Returns the type name as written in schema documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }

    /// Returns whether a JSON value is of this type.
    ///
    /// `integer` accepts only whole numbers; `number` accepts any number.
    #[must_use]
    pub fn matches(self, value: &serde_json::Value) -> bool {
        use serde_json::Value;
        match self {
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
            Self::String => value.is_string(),
            Self::Integer => matches!(value, Value::Number(n) if n.is_i64() || n.is_u64()),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Null => value.is_null(),
        }
    }

    /// Returns the schema type name of a JSON value, for diagnostics.
    #[must_use]
    pub const fn of(value: &serde_json::Value) -> &'static str {
        use serde_json::Value;
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

/// A structural schema node.
///
/// Mirrors the JSON-schema-like documents the harness consumes: a declared
/// `type`, per-property sub-schemas, a `required` list, the
/// `additionalProperties` policy, and an `items` sub-schema for arrays.
/// Unknown document keys (`$schema`, `title`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SchemaNode {
    /// Declared value type, if any.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    /// Sub-schemas for declared object properties.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, SchemaNode>,
    /// Property names that must be present.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Whether properties beyond `properties` are permitted. Defaults to true.
    #[serde(rename = "additionalProperties", default = "default_true")]
    pub additional_properties: bool,
    /// Element schema for arrays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
}

const fn default_true() -> bool {
    true
}

impl SchemaNode {
    /// Parses a schema node from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaParseError`] if the document does not describe a
    /// structural schema (e.g. an unknown `type` value).
    pub fn from_value(document: &serde_json::Value) -> Result<Self, SchemaParseError> {
        serde_json::from_value(document.clone()).map_err(|e| SchemaParseError {
            message: e.to_string(),
        })
    }

    /// Parses a schema node from raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaParseError`] if the bytes are not valid JSON or do not
    /// describe a structural schema.
    pub fn from_json_str(raw: &str) -> Result<Self, SchemaParseError> {
        serde_json::from_str(raw).map_err(|e| SchemaParseError {
            message: e.to_string(),
        })
    }
}
