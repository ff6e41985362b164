//! Schema registry adapter.

mod dir_registry;

pub use dir_registry::DirSchemaRegistry;
