//! HTTP Request body types

use serde::{Deserialize, Serialize};

/// HTTP request body.
///
/// JSON and form-encoded payloads are distinct variants, so a request can
/// never carry both at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// JSON document body
    Json(serde_json::Value),
    /// Form URL encoded body
    Form(Vec<(String, String)>),
}

impl RequestBody {
    /// Creates a JSON body from a document.
    #[must_use]
    pub const fn json(document: serde_json::Value) -> Self {
        Self::Json(document)
    }

    /// Creates a form-encoded body from key-value pairs.
    #[must_use]
    pub fn form<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Form(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns whether the body is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the content type the body is sent with.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some("application/json"),
            Self::Form(_) => Some("application/x-www-form-urlencoded"),
        }
    }
}
