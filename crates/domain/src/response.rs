//! Captured HTTP exchanges
//!
//! An [`Exchange`] is the immutable record of one completed request/response
//! pair: status, headers, body, and elapsed wall-clock duration. The body is
//! decoded as JSON on demand; a decode failure is reported as
//! [`ResponseDecodeError`], which is deliberately distinct from transport
//! failures.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The response body was not valid JSON where JSON was expected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("response body is not valid JSON: {message}")]
pub struct ResponseDecodeError {
    /// Parser error detail.
    pub message: String,
}

/// One completed request/response pair with timing.
///
/// Immutable once captured; owned exclusively by the case that created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    /// HTTP status code.
    pub status: u16,
    /// Response headers as a map.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Response body as text (lossy UTF-8 for binary payloads).
    pub body: String,
    /// Elapsed wall-clock duration between dispatch and full body receipt.
    #[serde(with = "duration_millis")]
    pub elapsed: Duration,
}

impl Exchange {
    /// Creates an `Exchange` from raw response data.
    #[must_use]
    pub fn new(
        status: u16,
        headers: HashMap<String, String>,
        body: Vec<u8>,
        elapsed: Duration,
    ) -> Self {
        let body = String::from_utf8(body)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());
        Self {
            status,
            headers,
            body,
            elapsed,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns true if the status code indicates a client error (4xx).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseDecodeError`] if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, ResponseDecodeError> {
        serde_json::from_str(&self.body).map_err(|e| ResponseDecodeError {
            message: e.to_string(),
        })
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    #[allow(clippy::cast_possible_truncation)]
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Truncation is acceptable for any realistic elapsed time
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
