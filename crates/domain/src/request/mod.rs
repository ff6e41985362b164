//! HTTP request model.
//!
//! A [`RequestSpec`] describes one outbound interaction: method, URL, query
//! parameters, and at most one body (JSON or form-encoded, never both).

mod body;
mod method;
mod query;
mod spec;

pub use body::RequestBody;
pub use method::HttpMethod;
pub use query::QueryParam;
pub use spec::{DEFAULT_TIMEOUT_MS, RequestSpec};
