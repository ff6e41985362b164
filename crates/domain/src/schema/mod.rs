//! Structural schemas and conformance checking.
//!
//! A structural schema describes the required shape of a JSON value: its
//! type, required properties, the policy for undeclared properties, and an
//! element schema for arrays. Schemas are sourced from files or supplied
//! inline; the validator is agnostic to origin.

mod node;
mod source;
mod validator;
mod violation;

pub use node::{SchemaNode, SchemaParseError, SchemaType};
pub use source::{Schema, SchemaSource};
pub use validator::validate;
pub use violation::Violation;
