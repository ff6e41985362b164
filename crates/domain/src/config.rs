//! Harness configuration
//!
//! Configuration is passed explicitly into the layers that need it rather
//! than held as ambient process-wide state, so cases stay independently
//! testable and parallel-safe.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::request::DEFAULT_TIMEOUT_MS;

/// Default base URL of the service under test.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

/// Default directory holding file-sourced schema documents.
pub const DEFAULT_SCHEMAS_DIR: &str = "schemas";

/// Explicit configuration for a harness run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Base URL of the API under test (e.g. `https://reqres.in/api`).
    pub base_url: Url,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Directory file-sourced schemas are resolved from.
    pub schemas_dir: PathBuf,
}

impl HarnessConfig {
    /// Creates a configuration for the given base URL with default timeout
    /// and schemas directory.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            schemas_dir: PathBuf::from(DEFAULT_SCHEMAS_DIR),
        }
    }

    /// Sets the per-request timeout (builder pattern).
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Sets the schemas directory (builder pattern).
    #[must_use]
    pub fn with_schemas_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.schemas_dir = dir.into();
        self
    }

    /// Returns the per-request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Builds a full endpoint URL under the base URL.
    ///
    /// Joins with exactly one `/` regardless of trailing/leading slashes on
    /// either side.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        // The default URL is a compile-time constant known to parse.
        #[allow(clippy::expect_used)]
        Self::new(Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"))
    }
}
