//! HTTP transport port

use async_trait::async_trait;
use restcheck_domain::request::RequestSpec;
use restcheck_domain::response::Exchange;
use thiserror::Error;

/// Network-level failure of an HTTP interaction.
///
/// Fatal to the enclosing case; never retried. Kept distinct from
/// [`restcheck_domain::ResponseDecodeError`], which concerns a received but
/// undecodable body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// No full response within the configured timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The timeout that elapsed.
        timeout_ms: u64,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other transport failure.
    #[error("transport failure: {0}")]
    Other(String),
}

/// Port for performing one HTTP interaction.
///
/// Implementations make exactly one outbound network call per invocation
/// (no retries, no caching) and capture the status, headers, body, and
/// elapsed wall-clock duration into an [`Exchange`].
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Performs the interaction described by `request`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network or URL failures.
    async fn execute(&self, request: &RequestSpec) -> Result<Exchange, TransportError>;
}
