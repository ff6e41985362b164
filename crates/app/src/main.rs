//! restcheck - Contract harness entry point
//!
//! Wires the reqwest transport and the directory schema registry into the
//! case catalog, runs every case, prints the per-case report, and exits
//! nonzero when any case failed or an expected-failure case unexpectedly
//! passed.

use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::Utc;
use restcheck_application::catalog::{self, CaseContext};
use restcheck_application::ports::SchemaRegistry;
use restcheck_application::runner::CatalogRunner;
use restcheck_domain::{HarnessConfig, RunSummary};
use restcheck_infrastructure::{DirSchemaRegistry, ReqwestHttpClient};
use tracing::info;
use url::Url;

mod report;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    match run().await {
        Ok(summary) => {
            report::print(&summary);
            if summary.all_acceptable() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("restcheck: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<RunSummary, Box<dyn Error>> {
    let config = config_from_env()?;
    info!(base_url = %config.base_url, "starting harness run");

    let client = Arc::new(ReqwestHttpClient::new()?);
    let registry = Arc::new(DirSchemaRegistry::new(&config.schemas_dir));
    registry.register_inline(
        catalog::SINGLE_USER_INLINE_SCHEMA,
        catalog::inline_single_user_schema(),
    );

    let started_at = Utc::now();
    let ctx = Arc::new(CaseContext::new(client, registry, config));
    let reports = CatalogRunner::new(ctx).run_all(catalog::catalog()).await;

    Ok(RunSummary::new(started_at, reports))
}

/// Builds the run configuration, applying environment overrides to the
/// defaults.
fn config_from_env() -> Result<HarnessConfig, Box<dyn Error>> {
    let mut config = HarnessConfig::default();

    if let Ok(base_url) = std::env::var("RESTCHECK_BASE_URL") {
        config.base_url = Url::parse(&base_url)?;
    }
    if let Ok(timeout_ms) = std::env::var("RESTCHECK_TIMEOUT_MS") {
        config.timeout_ms = timeout_ms.parse()?;
    }
    if let Ok(schemas_dir) = std::env::var("RESTCHECK_SCHEMAS_DIR") {
        config.schemas_dir = schemas_dir.into();
    }

    Ok(config)
}
