//! restcheck Domain - Core harness types
//!
//! This crate defines the domain model for the restcheck contract harness.
//! All types here are pure Rust with no I/O dependencies: the request and
//! exchange model, the structural schema model and validator, case outcomes,
//! and the harness configuration.

pub mod config;
pub mod error;
pub mod outcome;
pub mod request;
pub mod response;
pub mod schema;

pub use config::HarnessConfig;
pub use error::{DomainError, DomainResult};
pub use outcome::{CaseOutcome, CaseReport, RunSummary};
pub use response::{Exchange, ResponseDecodeError};
pub use schema::{Schema, SchemaNode, SchemaParseError, SchemaSource, SchemaType, Violation, validate};
