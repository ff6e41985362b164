//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the verification engine and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer.

mod http_client;
mod schema_registry;

pub use http_client::{HttpClient, TransportError};
pub use schema_registry::{SchemaError, SchemaRegistry};
