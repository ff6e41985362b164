//! The assertion-case catalog.
//!
//! Each case is an independent verification unit: it performs one HTTP
//! interaction (the empty-page boundary case performs two, the second
//! derived from the first response) and applies its checks. Cases never
//! share exchanges or process state, so the orchestrator may run them
//! concurrently; the only shared state is inside the remote service itself,
//! which every case tolerates by targeting fixed identifiers whose
//! update/delete semantics are idempotent under the remote contract.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use restcheck_domain::HarnessConfig;
use restcheck_domain::request::RequestSpec;
use serde_json::{Value, json};

use crate::checks;
use crate::error::CaseError;
use crate::ports::{HttpClient, SchemaRegistry};

/// Logical name of the file-sourced paginated list schema.
pub const LIST_USERS_SCHEMA: &str = "list_users";
/// Logical name of the file-sourced single-resource schema.
pub const SINGLE_USER_SCHEMA: &str = "single_user";
/// Logical name of the inline single-resource schema.
pub const SINGLE_USER_INLINE_SCHEMA: &str = "single_user_inline";
/// Logical name of the strict update-response schema.
pub const UPDATE_USER_SCHEMA: &str = "update_user";

/// Server-side artificial delay, in seconds, used by the latency-floor case.
const DELAY_SECONDS: u64 = 5;

/// Shared collaborators handed to every case.
pub struct CaseContext {
    /// HTTP transport port.
    pub client: Arc<dyn HttpClient>,
    /// Schema registry port.
    pub schemas: Arc<dyn SchemaRegistry>,
    /// Run configuration.
    pub config: HarnessConfig,
}

impl CaseContext {
    /// Creates a context from the two ports and the run configuration.
    #[must_use]
    pub fn new(
        client: Arc<dyn HttpClient>,
        schemas: Arc<dyn SchemaRegistry>,
        config: HarnessConfig,
    ) -> Self {
        Self {
            client,
            schemas,
            config,
        }
    }

    /// Builds a request against an endpoint under the configured base URL,
    /// carrying the configured timeout.
    fn request(
        &self,
        build: fn(String) -> RequestSpec,
        path: &str,
    ) -> RequestSpec {
        build(self.config.endpoint(path)).with_timeout_ms(self.config.timeout_ms)
    }
}

/// Boxed future produced by a case function.
pub type CaseFuture = Pin<Box<dyn Future<Output = Result<(), CaseError>> + Send>>;

/// A case body: borrows nothing, so cases can be spawned as tasks.
pub type CaseFn = fn(Arc<CaseContext>) -> CaseFuture;

/// One entry of the assertion catalog.
#[derive(Clone)]
pub struct CaseDef {
    /// Stable case identifier.
    pub id: &'static str,
    /// Whether this case documents a known non-compliance: a schema
    /// violation is its successful outcome.
    pub expected_failure: bool,
    run: CaseFn,
}

impl CaseDef {
    const fn new(id: &'static str, run: CaseFn) -> Self {
        Self {
            id,
            expected_failure: false,
            run,
        }
    }

    const fn expected_to_fail(id: &'static str, run: CaseFn) -> Self {
        Self {
            id,
            expected_failure: true,
            run,
        }
    }

    /// Runs the case body against the given context.
    pub fn run(&self, ctx: Arc<CaseContext>) -> CaseFuture {
        (self.run)(ctx)
    }
}

impl std::fmt::Debug for CaseDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseDef")
            .field("id", &self.id)
            .field("expected_failure", &self.expected_failure)
            .finish_non_exhaustive()
    }
}

/// The full ordered catalog.
#[must_use]
pub fn catalog() -> Vec<CaseDef> {
    vec![
        CaseDef::new("list_delay_latency_floor", list_delay_latency_floor),
        CaseDef::new("put_replaces_job", put_replaces_job),
        CaseDef::new("patch_updates_name", patch_updates_name),
        CaseDef::new("login_with_valid_credentials", login_with_valid_credentials),
        CaseDef::new("create_user", create_user),
        CaseDef::new("delete_user", delete_user),
        CaseDef::new("login_with_unknown_email", login_with_unknown_email),
        CaseDef::new("missing_user_is_not_found", missing_user_is_not_found),
        CaseDef::new("list_conforms_to_schema", list_conforms_to_schema),
        CaseDef::new(
            "single_user_conforms_to_file_schema",
            single_user_conforms_to_file_schema,
        ),
        CaseDef::new(
            "single_user_conforms_to_inline_schema",
            single_user_conforms_to_inline_schema,
        ),
        CaseDef::expected_to_fail(
            "update_echoes_undeclared_field",
            update_echoes_undeclared_field,
        ),
        CaseDef::new("per_page_matches_data_len", per_page_matches_data_len),
        CaseDef::new(
            "page_beyond_total_pages_is_empty",
            page_beyond_total_pages_is_empty,
        ),
    ]
}

/// The inline single-resource schema document.
///
/// Deliberately the same definition as `schemas/single_user.json`: the
/// registry must treat file-backed and inline sources equivalently.
#[must_use]
pub fn inline_single_user_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "data": {
                "type": "object",
                "properties": {
                    "id": {"type": "integer"},
                    "email": {"type": "string"},
                    "first_name": {"type": "string"},
                    "last_name": {"type": "string"},
                    "avatar": {"type": "string"}
                },
                "required": ["id", "email", "first_name", "last_name", "avatar"]
            },
            "support": {
                "type": "object",
                "properties": {
                    "url": {"type": "string"},
                    "text": {"type": "string"}
                },
                "required": ["url", "text"]
            }
        },
        "required": ["data", "support"]
    })
}

// Case 1: the server-side artificial delay must be reflected in elapsed
// wall-clock time.
fn list_delay_latency_floor(ctx: Arc<CaseContext>) -> CaseFuture {
    Box::pin(async move {
        let request = ctx
            .request(RequestSpec::get, "users")
            .with_query("delay", DELAY_SECONDS.to_string());
        let exchange = ctx.client.execute(&request).await?;
        checks::elapsed_at_least(&exchange, Duration::from_secs(DELAY_SECONDS))
    })
}

// Case 2: full replace echoes the submitted job back.
fn put_replaces_job(ctx: Arc<CaseContext>) -> CaseFuture {
    Box::pin(async move {
        let request = ctx
            .request(RequestSpec::put, "users/2")
            .with_json(json!({"name": "morpheus", "job": "zion resident"}));
        let exchange = ctx.client.execute(&request).await?;
        checks::field_equals(&exchange, "/job", &json!("zion resident"))
    })
}

// Case 3: partial update echoes the submitted name back.
fn patch_updates_name(ctx: Arc<CaseContext>) -> CaseFuture {
    Box::pin(async move {
        let request = ctx
            .request(RequestSpec::patch, "users/2")
            .with_json(json!({"name": "morpheus", "job": "zion resident"}));
        let exchange = ctx.client.execute(&request).await?;
        checks::field_equals(&exchange, "/name", &json!("morpheus"))
    })
}

// Case 4: valid credentials log in with 200. Sent form-encoded.
fn login_with_valid_credentials(ctx: Arc<CaseContext>) -> CaseFuture {
    Box::pin(async move {
        let request = ctx
            .request(RequestSpec::post, "login")
            .with_form([("email", "eve.holt@reqres.in"), ("password", "cityslicka")]);
        let exchange = ctx.client.execute(&request).await?;
        checks::status_is(&exchange, 200)
    })
}

// Case 5: resource creation yields 201.
fn create_user(ctx: Arc<CaseContext>) -> CaseFuture {
    Box::pin(async move {
        let request = ctx
            .request(RequestSpec::post, "users")
            .with_json(json!({"name": "morpheus", "job": "leader"}));
        let exchange = ctx.client.execute(&request).await?;
        checks::status_is(&exchange, 201)
    })
}

// Case 6: deletion yields 204 with no body validation. The remote reports
// success even for an already-deleted id, so ordering against the update
// cases does not matter.
fn delete_user(ctx: Arc<CaseContext>) -> CaseFuture {
    Box::pin(async move {
        let request = ctx.request(RequestSpec::delete, "users/2");
        let exchange = ctx.client.execute(&request).await?;
        checks::status_is(&exchange, 204)
    })
}

// Case 7: a malformed email is rejected with 400.
fn login_with_unknown_email(ctx: Arc<CaseContext>) -> CaseFuture {
    Box::pin(async move {
        let request = ctx
            .request(RequestSpec::post, "login")
            .with_form([("email", "kek"), ("password", "cityslicka")]);
        let exchange = ctx.client.execute(&request).await?;
        checks::status_is(&exchange, 400)
    })
}

// Case 8: a nonexistent user path yields 404.
fn missing_user_is_not_found(ctx: Arc<CaseContext>) -> CaseFuture {
    Box::pin(async move {
        let request = ctx.request(RequestSpec::get, "users/unknown");
        let exchange = ctx.client.execute(&request).await?;
        checks::status_is(&exchange, 404)
    })
}

// Case 9: the paginated list envelope validates against the list schema.
fn list_conforms_to_schema(ctx: Arc<CaseContext>) -> CaseFuture {
    Box::pin(async move {
        let request = ctx.request(RequestSpec::get, "users").with_query("page", "2");
        let exchange = ctx.client.execute(&request).await?;
        checks::conforms(&exchange, ctx.schemas.as_ref(), LIST_USERS_SCHEMA)
    })
}

// Case 10: single-resource envelope against the file-sourced schema.
fn single_user_conforms_to_file_schema(ctx: Arc<CaseContext>) -> CaseFuture {
    Box::pin(async move {
        let request = ctx.request(RequestSpec::get, "users/2");
        let exchange = ctx.client.execute(&request).await?;
        checks::conforms(&exchange, ctx.schemas.as_ref(), SINGLE_USER_SCHEMA)
    })
}

// Case 11: the same check against the inline schema. Both sourcing paths
// must behave equivalently.
fn single_user_conforms_to_inline_schema(ctx: Arc<CaseContext>) -> CaseFuture {
    Box::pin(async move {
        let request = ctx.request(RequestSpec::get, "users/2");
        let exchange = ctx.client.execute(&request).await?;
        checks::conforms(&exchange, ctx.schemas.as_ref(), SINGLE_USER_INLINE_SCHEMA)
    })
}

// Case 12 (expected to fail): the remote echoes undeclared fields back, so
// the strict no-additional-properties schema must be violated.
fn update_echoes_undeclared_field(ctx: Arc<CaseContext>) -> CaseFuture {
    Box::pin(async move {
        let request = ctx
            .request(RequestSpec::patch, "users/2")
            .with_json(json!({"name": "morpheus", "job": "zion resident", "kek": "lel"}));
        let exchange = ctx.client.execute(&request).await?;
        checks::conforms(&exchange, ctx.schemas.as_ref(), UPDATE_USER_SCHEMA)
    })
}

// Case 13: per_page equals the number of elements actually returned.
fn per_page_matches_data_len(ctx: Arc<CaseContext>) -> CaseFuture {
    Box::pin(async move {
        let request = ctx.request(RequestSpec::get, "users").with_query("page", "2");
        let exchange = ctx.client.execute(&request).await?;
        let document = exchange.json()?;

        let per_page = checks::require_u64(&document, "/per_page")?;
        let data_len = checks::require_array(&document, "/data")?.len() as u64;

        if per_page == data_len {
            Ok(())
        } else {
            Err(CaseError::mismatch(
                "per_page does not match the element count of data",
                per_page.to_string(),
                data_len.to_string(),
            ))
        }
    })
}

// Case 14: two sequential exchanges. A populated page provides total_pages,
// and the page after it must come back empty.
fn page_beyond_total_pages_is_empty(ctx: Arc<CaseContext>) -> CaseFuture {
    Box::pin(async move {
        let request = ctx.request(RequestSpec::get, "users").with_query("page", "2");
        let exchange = ctx.client.execute(&request).await?;
        let document = exchange.json()?;

        if checks::require_array(&document, "/data")?.is_empty() {
            return Err(CaseError::mismatch(
                "populated page came back empty",
                "non-empty data".to_string(),
                "empty data".to_string(),
            ));
        }
        let total_pages = checks::require_u64(&document, "/total_pages")?;

        let beyond = ctx
            .request(RequestSpec::get, "users")
            .with_query("page", (total_pages + 1).to_string());
        let exchange = ctx.client.execute(&beyond).await?;
        let document = exchange.json()?;

        if checks::require_array(&document, "/data")?.is_empty() {
            Ok(())
        } else {
            Err(CaseError::mismatch(
                format!("page {} holds data beyond total_pages", total_pages + 1),
                "empty data".to_string(),
                "non-empty data".to_string(),
            ))
        }
    })
}
