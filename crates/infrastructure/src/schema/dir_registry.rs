//! Directory-backed schema registry.
//!
//! Resolves logical schema names against a fixed directory
//! (`<dir>/<name>.json`) or an explicitly registered inline document, through
//! the one `resolve` entry point the validator is agnostic to.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::SystemTime;

use restcheck_application::ports::{SchemaError, SchemaRegistry};
use restcheck_domain::schema::{Schema, SchemaNode, SchemaSource};
use tracing::debug;

/// Cached file-backed definition, keyed to the source's identity on disk.
///
/// A definition is only served from cache while the file's modification time
/// and length both match, so an edited schema is never served stale within a
/// process run.
#[derive(Debug, Clone)]
struct CachedFile {
    modified: SystemTime,
    len: u64,
    definition: SchemaNode,
}

/// Schema registry over a schemas directory plus inline registrations.
pub struct DirSchemaRegistry {
    dir: PathBuf,
    inline: Mutex<HashMap<String, serde_json::Value>>,
    cache: Mutex<HashMap<String, CachedFile>>,
}

impl DirSchemaRegistry {
    /// Creates a registry resolving file-backed names under `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            inline: Mutex::new(HashMap::new()),
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn schema_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    /// Picks the source a name resolves against. Inline registrations shadow
    /// files of the same name.
    fn source_of(&self, name: &str) -> Option<SchemaSource> {
        if let Some(document) = self
            .inline
            .lock()
            .map_or(None, |inline| inline.get(name).cloned())
        {
            return Some(SchemaSource::Inline(document));
        }
        let path = self.schema_path(name);
        path.is_file().then(|| SchemaSource::File(path))
    }

    fn file_identity(path: &Path, name: &str) -> Result<(SystemTime, u64), SchemaError> {
        let metadata = std::fs::metadata(path).map_err(|e| SchemaError::Io {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        let modified = metadata.modified().map_err(|e| SchemaError::Io {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        Ok((modified, metadata.len()))
    }

    fn resolve_file(&self, name: &str, path: &Path) -> Result<Schema, SchemaError> {
        let (modified, len) = Self::file_identity(path, name)?;

        if let Some(cached) = self.cache.lock().map_or(None, |cache| cache.get(name).cloned())
            && cached.modified == modified
            && cached.len == len
        {
            return Ok(Schema::new(name, cached.definition));
        }

        debug!(name, path = %path.display(), "loading schema from file");
        let raw = std::fs::read_to_string(path).map_err(|e| SchemaError::Io {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        let definition = SchemaNode::from_json_str(&raw).map_err(|e| SchemaError::Parse {
            name: name.to_string(),
            message: e.message,
        })?;

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(
                name.to_string(),
                CachedFile {
                    modified,
                    len,
                    definition: definition.clone(),
                },
            );
        }

        Ok(Schema::new(name, definition))
    }

    fn resolve_inline(&self, name: &str, document: &serde_json::Value) -> Result<Schema, SchemaError> {
        SchemaNode::from_value(document)
            .map(|definition| Schema::new(name, definition))
            .map_err(|e| SchemaError::Parse {
                name: name.to_string(),
                message: e.message,
            })
    }
}

impl SchemaRegistry for DirSchemaRegistry {
    fn resolve(&self, name: &str) -> Result<Schema, SchemaError> {
        match self.source_of(name) {
            Some(SchemaSource::Inline(document)) => self.resolve_inline(name, &document),
            Some(SchemaSource::File(path)) => self.resolve_file(name, &path),
            None => Err(SchemaError::NotFound {
                name: name.to_string(),
            }),
        }
    }

    fn register_inline(&self, name: &str, document: serde_json::Value) {
        if let Ok(mut inline) = self.inline.lock() {
            inline.insert(name.to_string(), document);
        }
    }
}
