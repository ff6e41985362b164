//! Schema registry port

use restcheck_domain::schema::Schema;
use thiserror::Error;

/// Configuration-level schema resolution failure. Fatal to the enclosing
/// case.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The name resolves to no file and no inline definition.
    #[error("schema '{name}' not found")]
    NotFound {
        /// The logical name that failed to resolve.
        name: String,
    },

    /// The schema source could not be read.
    #[error("failed to read schema '{name}': {message}")]
    Io {
        /// The logical name being resolved.
        name: String,
        /// Underlying I/O detail.
        message: String,
    },

    /// The source bytes are not a valid structural schema document.
    #[error("schema '{name}' failed to parse: {message}")]
    Parse {
        /// The logical name being resolved.
        name: String,
        /// Parser detail.
        message: String,
    },
}

/// Port for resolving logical schema names to parsed schemas.
///
/// File-backed and inline definitions resolve through the same entry point.
/// Implementations may cache per name, but must never serve a definition
/// that is stale with respect to its source within a process run.
pub trait SchemaRegistry: Send + Sync {
    /// Resolves a logical name to a parsed schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if the name is unknown or its source cannot
    /// be read or parsed.
    fn resolve(&self, name: &str) -> Result<Schema, SchemaError>;

    /// Registers an inline schema document under a logical name.
    ///
    /// A later registration under the same name replaces the earlier one.
    fn register_inline(&self, name: &str, document: serde_json::Value);
}
