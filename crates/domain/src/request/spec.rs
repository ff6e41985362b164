//! Request specification

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::{HttpMethod, QueryParam, RequestBody};

/// Default request timeout in milliseconds.
///
/// Conservative but finite, so a hung call never blocks a run indefinitely.
/// The artificial-delay case stays well under this.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Specification for one outbound HTTP interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: HttpMethod,
    /// Target URL without query string.
    pub url: String,
    /// Query parameters appended to the URL.
    #[serde(default)]
    pub query: Vec<QueryParam>,
    /// Request body.
    #[serde(default)]
    pub body: RequestBody,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl RequestSpec {
    /// Creates a request with the given method and URL.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Creates a POST request.
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Creates a PUT request.
    #[must_use]
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, url)
    }

    /// Creates a PATCH request.
    #[must_use]
    pub fn patch(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, url)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, url)
    }

    /// Adds a query parameter (builder pattern).
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push(QueryParam::new(key, value));
        self
    }

    /// Sets a JSON body (builder pattern).
    #[must_use]
    pub fn with_json(mut self, document: serde_json::Value) -> Self {
        self.body = RequestBody::json(document);
        self
    }

    /// Sets a form-encoded body (builder pattern).
    #[must_use]
    pub fn with_form<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.body = RequestBody::form(fields);
        self
    }

    /// Sets the request timeout (builder pattern).
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Returns the full URL with the encoded query string appended.
    #[must_use]
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }

        let encoded: String = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter().map(|p| (&p.key, &p.value)))
            .finish();

        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.url, separator, encoded)
    }
}
