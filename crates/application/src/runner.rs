//! Case execution and outcome resolution.
//!
//! Runs catalog cases and resolves each to a [`CaseOutcome`]. For a case
//! flagged expected-to-fail, only a schema violation counts as the
//! documented failure; a transport, decode, or configuration error is still
//! a real failure, and a clean pass is surfaced as the `UnexpectedPass`
//! anomaly.

use std::sync::Arc;
use std::time::{Duration, Instant};

use restcheck_domain::outcome::{CaseOutcome, CaseReport};
use tracing::{debug, warn};

use crate::catalog::{CaseContext, CaseDef};
use crate::error::CaseError;

/// Resolves a case result to an outcome and optional diagnostic detail.
#[must_use]
pub fn resolve_outcome(
    expected_failure: bool,
    result: Result<(), CaseError>,
) -> (CaseOutcome, Option<String>) {
    match (expected_failure, result) {
        (false, Ok(())) => (CaseOutcome::Passed, None),
        (false, Err(e)) => (CaseOutcome::Failed, Some(e.to_string())),
        (true, Err(e)) if e.is_violation() => (CaseOutcome::ExpectedFailure, Some(e.to_string())),
        (true, Err(e)) => (CaseOutcome::Failed, Some(e.to_string())),
        (true, Ok(())) => (
            CaseOutcome::UnexpectedPass,
            Some("documented violation did not occur; remote behavior may have changed".to_string()),
        ),
    }
}

/// Executes catalog cases against a shared context.
pub struct CatalogRunner {
    ctx: Arc<CaseContext>,
}

impl CatalogRunner {
    /// Creates a runner over the given context.
    #[must_use]
    pub const fn new(ctx: Arc<CaseContext>) -> Self {
        Self { ctx }
    }

    /// Runs a single case to a report.
    pub async fn run_case(&self, case: &CaseDef) -> CaseReport {
        let start = Instant::now();
        debug!(case = case.id, "running case");

        let result = case.run(Arc::clone(&self.ctx)).await;
        let elapsed = start.elapsed();
        let (outcome, detail) = resolve_outcome(case.expected_failure, result);

        match outcome {
            CaseOutcome::Passed | CaseOutcome::ExpectedFailure => {
                debug!(case = case.id, outcome = outcome.label(), "case finished");
            }
            CaseOutcome::Failed | CaseOutcome::UnexpectedPass => {
                warn!(
                    case = case.id,
                    outcome = outcome.label(),
                    detail = detail.as_deref().unwrap_or(""),
                    "case did not resolve as expected"
                );
            }
        }

        let report = CaseReport::new(case.id, outcome, elapsed);
        match detail {
            Some(detail) => report.with_detail(detail),
            None => report,
        }
    }

    /// Runs every case concurrently and returns reports in catalog order.
    ///
    /// Cases share no process state, so they are spawned as independent
    /// tasks; a panicking case is reported as failed without affecting the
    /// others.
    pub async fn run_all(&self, cases: Vec<CaseDef>) -> Vec<CaseReport> {
        let ids: Vec<&'static str> = cases.iter().map(|c| c.id).collect();

        let handles: Vec<_> = cases
            .into_iter()
            .map(|case| {
                let runner = Self::new(Arc::clone(&self.ctx));
                tokio::spawn(async move { runner.run_case(&case).await })
            })
            .collect();

        let mut reports = Vec::with_capacity(handles.len());
        for (id, handle) in ids.into_iter().zip(handles) {
            let report = match handle.await {
                Ok(report) => report,
                Err(e) => CaseReport::new(id, CaseOutcome::Failed, Duration::ZERO)
                    .with_detail(format!("case task panicked: {e}")),
            };
            reports.push(report);
        }
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use restcheck_domain::schema::Violation;

    use crate::ports::TransportError;

    fn violation() -> CaseError {
        Violation::new("$.kek", "no additional properties", "kek", "undeclared").into()
    }

    #[test]
    fn test_plain_case_pass_and_fail() {
        assert_eq!(resolve_outcome(false, Ok(())), (CaseOutcome::Passed, None));

        let (outcome, detail) =
            resolve_outcome(false, Err(CaseError::mismatch("status", "200", "404")));
        assert_eq!(outcome, CaseOutcome::Failed);
        assert!(detail.unwrap().contains("status"));
    }

    #[test]
    fn test_expected_failure_resolves_on_violation() {
        let (outcome, detail) = resolve_outcome(true, Err(violation()));
        assert_eq!(outcome, CaseOutcome::ExpectedFailure);
        assert!(detail.unwrap().contains("$.kek"));
    }

    #[test]
    fn test_expected_failure_with_transport_error_is_still_a_failure() {
        let (outcome, _) = resolve_outcome(
            true,
            Err(TransportError::Connect("refused".to_string()).into()),
        );
        assert_eq!(outcome, CaseOutcome::Failed);
    }

    #[test]
    fn test_expected_failure_that_passes_is_an_anomaly() {
        let (outcome, detail) = resolve_outcome(true, Ok(()));
        assert_eq!(outcome, CaseOutcome::UnexpectedPass);
        assert!(detail.unwrap().contains("remote behavior"));
    }
}
