//! restcheck Infrastructure - Port adapters
//!
//! Concrete implementations of the application ports: a reqwest-backed HTTP
//! transport and a directory-backed schema registry.

pub mod adapters;
pub mod schema;

pub use adapters::ReqwestHttpClient;
pub use schema::DirSchemaRegistry;
