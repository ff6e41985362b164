//! Schema conformance violations

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A specific schema-conformance failure.
///
/// Carries the document location that failed, what the schema expected
/// there, and what was actually found. Always surfaced, never swallowed.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("schema violation at {location}: {message}")]
pub struct Violation {
    /// Document path of the failure (e.g. `$.data[3].email`).
    pub location: String,
    /// What the schema declared.
    pub expected: String,
    /// What the document contained.
    pub actual: String,
    /// Human-readable summary.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        location: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            expected: expected.into(),
            actual: actual.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_includes_location_and_message() {
        let violation = Violation::new("$.data", "array", "string", "type mismatch");
        assert_eq!(
            violation.to_string(),
            "schema violation at $.data: type mismatch"
        );
    }
}
