//! Case outcomes and run reporting.
//!
//! A case resolves to one of four outcomes rather than a boolean: an
//! expected-to-fail case that fails is `ExpectedFailure`, and one that
//! passes is `UnexpectedPass`, a reportable anomaly rather than a silent
//! success.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a single assertion case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseOutcome {
    /// All checks held.
    Passed,
    /// A check or a collaborator failed.
    Failed,
    /// The case is flagged expected-to-fail and failed as documented.
    ExpectedFailure,
    /// The case is flagged expected-to-fail but passed. An anomaly.
    UnexpectedPass,
}

impl CaseOutcome {
    /// Returns whether this outcome counts as acceptable for the run.
    #[must_use]
    pub const fn is_acceptable(self) -> bool {
        matches!(self, Self::Passed | Self::ExpectedFailure)
    }

    /// Returns a short report label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Passed => "pass",
            Self::Failed => "fail",
            Self::ExpectedFailure => "xfail",
            Self::UnexpectedPass => "xpass",
        }
    }
}

/// Report for one executed case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    /// Case identifier.
    pub id: String,
    /// Resolved outcome.
    pub outcome: CaseOutcome,
    /// Captured failure or violation detail, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Wall-clock time the case took, including its network calls.
    #[serde(with = "duration_millis")]
    pub elapsed: Duration,
}

impl CaseReport {
    /// Creates a report without detail.
    #[must_use]
    pub fn new(id: impl Into<String>, outcome: CaseOutcome, elapsed: Duration) -> Self {
        Self {
            id: id.into(),
            outcome,
            detail: None,
            elapsed,
        }
    }

    /// Attaches diagnostic detail (builder pattern).
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Results of one full harness run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Per-case reports.
    pub reports: Vec<CaseReport>,
    /// Number of `Passed` cases.
    pub passed: usize,
    /// Number of `Failed` cases.
    pub failed: usize,
    /// Number of `ExpectedFailure` cases.
    pub expected_failures: usize,
    /// Number of `UnexpectedPass` cases.
    pub unexpected_passes: usize,
}

impl RunSummary {
    /// Creates a summary from per-case reports, tallying outcomes.
    #[must_use]
    pub fn new(started_at: DateTime<Utc>, reports: Vec<CaseReport>) -> Self {
        let count =
            |outcome| reports.iter().filter(|r| r.outcome == outcome).count();

        Self {
            run_id: Uuid::now_v7(),
            started_at,
            passed: count(CaseOutcome::Passed),
            failed: count(CaseOutcome::Failed),
            expected_failures: count(CaseOutcome::ExpectedFailure),
            unexpected_passes: count(CaseOutcome::UnexpectedPass),
            reports,
        }
    }

    /// Returns the number of executed cases.
    #[must_use]
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    /// Returns whether the whole run is acceptable.
    ///
    /// Any `Failed` case is a regression; any `UnexpectedPass` means a
    /// documented non-compliance silently became compliant and must be
    /// surfaced.
    #[must_use]
    pub const fn all_acceptable(&self) -> bool {
        self.failed == 0 && self.unexpected_passes == 0
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
