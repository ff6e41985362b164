//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port. It performs exactly one
//! outbound call per invocation and measures elapsed wall-clock time from
//! request dispatch to full body receipt.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use restcheck_application::ports::{HttpClient, TransportError};
use restcheck_domain::request::{HttpMethod, RequestBody, RequestSpec};
use restcheck_domain::response::Exchange;
use tracing::debug;

/// HTTP transport backed by `reqwest::Client`.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new transport with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "restcheck/0.1.0"
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("restcheck/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a transport from a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts the domain `HttpMethod` to a reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Attaches the request body to the builder.
    fn apply_body(builder: reqwest::RequestBuilder, body: &RequestBody) -> reqwest::RequestBuilder {
        match body {
            RequestBody::Empty => builder,
            RequestBody::Json(document) => builder.json(document),
            RequestBody::Form(fields) => builder.form(fields),
        }
    }

    /// Maps reqwest errors onto the port's `TransportError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }
        if error.is_connect() {
            return TransportError::Connect(error.to_string());
        }
        TransportError::Other(error.to_string())
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: &RequestSpec) -> Result<Exchange, TransportError> {
        let url = request.full_url();
        let parsed_url =
            Url::parse(&url).map_err(|e| TransportError::InvalidUrl(format!("{e}: {url}")))?;

        debug!(method = %request.method, url = %url, "dispatching request");
        let start = Instant::now();

        let builder = self
            .client
            .request(Self::to_reqwest_method(request.method), parsed_url)
            .timeout(Duration::from_millis(request.timeout_ms));
        let builder = Self::apply_body(builder, &request.body);

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, request.timeout_ms))?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        // The elapsed duration covers the full body, not just the head.
        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_error(&e, request.timeout_ms))?
            .to_vec();
        let elapsed = start.elapsed();

        debug!(status, elapsed_ms = elapsed.as_millis() as u64, "response received");
        Ok(Exchange::new(status, headers, body, elapsed))
    }
}
