//! Submission status and submit errors

use core::fmt;

use clinic_leads::ValidationReport;

/// How long an inline field error stays visible
pub const ERROR_DISMISS_MS: f64 = 3000.0;

/// How long the success indicator stays visible after a submit
pub const SUCCESS_VISIBLE_MS: f64 = 5000.0;

/// Where a form is in its submit cycle
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitStatus {
    /// Nothing in flight
    #[default]
    Idle,
    /// Payload handed off, awaiting the response
    Submitting,
    /// Stored; the indicator shows until `until_ms`
    Succeeded { until_ms: f64 },
    /// Rejected by the endpoint
    Failed { message: String },
}

impl SubmitStatus {
    /// Check if a request is in flight
    #[inline]
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }
}

/// Why a submit did not produce a payload
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// One or more fields failed validation
    Invalid(ValidationReport),
    /// A previous submit has not finished
    InFlight,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(report) => match report.first() {
                Some((field, error)) => write!(f, "{}: {}", field, error),
                None => write!(f, "form is invalid"),
            },
            SubmitError::InFlight => write!(f, "a submission is already in progress"),
        }
    }
}

impl std::error::Error for SubmitError {}
