use std::time::Duration;
use thiserror::Error;

/// Coarse failure category carried in failure reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum FailureKind {
    Request,
    Protocol,
    Decode,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// DNS, connect or transport failure
    #[error("request failed: {0}")]
    Request(String),

    #[error("request timed out after {}s", .after.as_secs())]
    Timeout { after: Duration },

    /// Service answered with a non-2xx status
    #[error("recommendation service returned HTTP {status}")]
    Status { status: u16, body: String },

    /// Body is not JSON or misses required fields
    #[error("malformed playlist response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Request(_) | FetchError::Timeout { .. } => FailureKind::Request,
            FetchError::Status { .. } => FailureKind::Protocol,
            FetchError::Decode(_) => FailureKind::Decode,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body excerpt for non-2xx answers, if the service sent one.
    pub fn body(&self) -> Option<&str> {
        match self {
            FetchError::Status { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            FetchError::Timeout { after: timeout }
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}
