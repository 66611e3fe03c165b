//! Contact form module
//!
//! Field editing, blur validation with timed dismissal, submit gating and
//! the success indicator for the patient and hospital forms.

mod form;
mod status;

pub use form::{ContactForm, FormView};
pub use status::{SubmitError, SubmitStatus, ERROR_DISMISS_MS, SUCCESS_VISIBLE_MS};
