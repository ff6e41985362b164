//! restcheck Application - Verification engine
//!
//! Ports to the outside world (HTTP transport, schema registry), the check
//! vocabulary, the assertion-case catalog, and the runner that resolves each
//! case to a pass / fail / expected-failure outcome.

pub mod catalog;
pub mod checks;
pub mod error;
pub mod ports;
pub mod runner;

pub use catalog::{CaseContext, CaseDef, catalog, inline_single_user_schema};
pub use error::CaseError;
pub use ports::{HttpClient, SchemaError, SchemaRegistry, TransportError};
pub use runner::CatalogRunner;
