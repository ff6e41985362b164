//! Schema identity and sourcing

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::SchemaNode;

/// Where a schema definition comes from.
///
/// File-backed and inline schemas are resolved through the same registry
/// entry point, so the validator never needs to know the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum SchemaSource {
    /// A JSON document file on disk.
    File(PathBuf),
    /// An in-process JSON literal.
    Inline(serde_json::Value),
}

/// A named, parsed structural schema.
///
/// The definition is read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Logical name the schema was resolved by.
    pub name: String,
    /// Parsed definition.
    pub definition: SchemaNode,
}

impl Schema {
    /// Creates a named schema from a parsed definition.
    #[must_use]
    pub fn new(name: impl Into<String>, definition: SchemaNode) -> Self {
        Self {
            name: name.into(),
            definition,
        }
    }
}
