//! Case-level error taxonomy
//!
//! Every error is local to its case: one case's failure never affects
//! another case's execution.

use restcheck_domain::response::ResponseDecodeError;
use restcheck_domain::schema::Violation;
use thiserror::Error;

use crate::ports::{SchemaError, TransportError};

/// Any failure that aborts an assertion case.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CaseError {
    /// Network or connection failure.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Non-JSON body where JSON was expected.
    #[error(transparent)]
    Decode(#[from] ResponseDecodeError),

    /// Schema could not be resolved or parsed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The response failed structural conformance.
    ///
    /// For a case flagged expected-to-fail this is the successful outcome.
    #[error(transparent)]
    Violation(#[from] Violation),

    /// A plain value or status comparison failed.
    #[error("assertion mismatch: {message} (expected {expected}, actual {actual})")]
    Mismatch {
        /// What the case expected.
        expected: String,
        /// What was observed.
        actual: String,
        /// Human-readable summary.
        message: String,
    },
}

impl CaseError {
    /// Creates a value-comparison mismatch.
    #[must_use]
    pub fn mismatch(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::Mismatch {
            expected: expected.into(),
            actual: actual.into(),
            message: message.into(),
        }
    }

    /// Returns whether this error is a schema violation.
    #[must_use]
    pub const fn is_violation(&self) -> bool {
        matches!(self, Self::Violation(_))
    }
}
