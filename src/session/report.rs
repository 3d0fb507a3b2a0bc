use chrono::{DateTime, Utc};
use tracing::error;

use crate::recommend::{FailureKind, FetchError};

#[derive(Debug, Clone, PartialEq)]
pub struct FailureReport {
    pub mood_id: String,
    pub kind: FailureKind,
    pub detail: String,
    pub status: Option<u16>,
    pub body: Option<String>,
    pub at: DateTime<Utc>,
}

impl FailureReport {
    pub fn new(mood_id: &str, err: &FetchError) -> Self {
        FailureReport {
            mood_id: mood_id.to_string(),
            kind: err.kind(),
            detail: err.to_string(),
            status: err.status(),
            body: err.body().map(str::to_string),
            at: Utc::now(),
        }
    }
}

/// Receives failed fetches for logging or alerting.
pub trait FailureReporter: Send + Sync {
    fn report(&self, report: &FailureReport);
}

/// Default reporter: one `error!` line per failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
    fn report(&self, report: &FailureReport) {
        error!(
            mood = %report.mood_id,
            kind = %report.kind,
            status = report.status,
            body = report.body.as_deref(),
            at = %report.at.to_rfc3339(),
            "Error fetching playlist: {}", report.detail
        );
    }
}
