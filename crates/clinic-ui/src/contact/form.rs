//! Contact form state machine

use std::collections::BTreeMap;

use clinic_leads::{Field, FieldError, Inquiry};
use serde::Serialize;

use super::status::{SubmitError, SubmitStatus, ERROR_DISMISS_MS, SUCCESS_VISIBLE_MS};

/// An inline error and the time it disappears
#[derive(Clone, Copy, Debug, PartialEq)]
struct Notice {
    field: Field,
    error: FieldError,
    expires_at_ms: f64,
}

/// Snapshot handed to the renderer
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView<V> {
    pub values: V,
    pub errors: BTreeMap<&'static str, String>,
    pub submitting: bool,
    pub success: bool,
    pub failure: Option<String>,
}

/// One contact form (patient or hospital)
///
/// Errors expire on their own; call [`ContactForm::tick`] at
/// [`ContactForm::next_deadline`] to drop them and the success indicator.
#[derive(Clone, Debug, Default)]
pub struct ContactForm<I: Inquiry> {
    values: I,
    notices: Vec<Notice>,
    status: SubmitStatus,
}

impl<I: Inquiry> ContactForm<I> {
    /// Create an empty form
    pub fn new() -> Self {
        Self {
            values: I::default(),
            notices: Vec::new(),
            status: SubmitStatus::Idle,
        }
    }

    /// Current values
    #[inline]
    pub fn values(&self) -> &I {
        &self.values
    }

    /// Submit status
    #[inline]
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Edit a field; clears that field's error
    pub fn set_field(&mut self, field: Field, value: &str) -> bool {
        if !self.values.set(field, value) {
            return false;
        }
        self.notices.retain(|n| n.field != field);
        true
    }

    /// Validate a field when it loses focus
    pub fn blur(&mut self, field: Field, now_ms: f64) -> Option<FieldError> {
        let value = self.values.get(field)?;
        let result = field.check(value);
        self.notices.retain(|n| n.field != field);
        let error = result.err()?;
        self.notices.push(Notice {
            field,
            error,
            expires_at_ms: now_ms + ERROR_DISMISS_MS,
        });
        Some(error)
    }

    /// Error currently shown for a field
    pub fn error(&self, field: Field, now_ms: f64) -> Option<FieldError> {
        self.notices
            .iter()
            .find(|n| n.field == field && now_ms < n.expires_at_ms)
            .map(|n| n.error)
    }

    /// Errors currently shown, in form order
    pub fn visible_errors(&self, now_ms: f64) -> Vec<(Field, FieldError)> {
        I::FIELDS
            .iter()
            .filter_map(|f| self.error(*f, now_ms).map(|e| (*f, e)))
            .collect()
    }

    /// Validate every field and hand out the payload to send
    ///
    /// An invalid form shows every error and produces nothing to send.
    pub fn submit(&mut self, now_ms: f64) -> Result<I, SubmitError> {
        if self.status.is_submitting() {
            return Err(SubmitError::InFlight);
        }

        let report = self.values.validate();
        self.notices.clear();
        if !report.is_valid() {
            self.notices
                .extend(report.errors().iter().map(|(field, error)| Notice {
                    field: *field,
                    error: *error,
                    expires_at_ms: now_ms + ERROR_DISMISS_MS,
                }));
            return Err(SubmitError::Invalid(report));
        }

        self.status = SubmitStatus::Submitting;
        Ok(self.values.clone())
    }

    /// Record the endpoint's answer to the last submit
    pub fn finish_submit(&mut self, result: Result<(), String>, now_ms: f64) {
        match result {
            Ok(()) => {
                self.values = I::default();
                self.notices.clear();
                self.status = SubmitStatus::Succeeded {
                    until_ms: now_ms + SUCCESS_VISIBLE_MS,
                };
            }
            Err(message) => {
                self.status = SubmitStatus::Failed { message };
            }
        }
    }

    /// Whether the success indicator is showing
    pub fn success_visible(&self, now_ms: f64) -> bool {
        matches!(self.status, SubmitStatus::Succeeded { until_ms } if now_ms < until_ms)
    }

    /// Drop expired errors and an expired success indicator
    ///
    /// Returns true if anything visible changed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| now_ms < n.expires_at_ms);
        let mut changed = self.notices.len() != before;

        if let SubmitStatus::Succeeded { until_ms } = self.status {
            if now_ms >= until_ms {
                self.status = SubmitStatus::Idle;
                changed = true;
            }
        }
        changed
    }

    /// Earliest time at which [`ContactForm::tick`] has work to do
    pub fn next_deadline(&self) -> Option<f64> {
        let success = match self.status {
            SubmitStatus::Succeeded { until_ms } => Some(until_ms),
            _ => None,
        };
        self.notices
            .iter()
            .map(|n| n.expires_at_ms)
            .chain(success)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Current state for the renderer
    pub fn view(&self, now_ms: f64) -> FormView<I>
    where
        I: Serialize,
    {
        FormView {
            values: self.values.clone(),
            errors: self
                .visible_errors(now_ms)
                .into_iter()
                .map(|(field, error)| (field.as_str(), error.to_string()))
                .collect(),
            submitting: self.status.is_submitting(),
            success: self.success_visible(now_ms),
            failure: match &self.status {
                SubmitStatus::Failed { message } => Some(message.clone()),
                _ => None,
            },
        }
    }
}
