//! Lead capture for the clinic site
//!
//! Shared between the browser forms (`clinic-ui`) and the submit endpoints
//! (`clinic-server`):
//!
//! - [`field`]: form fields and the inline error messages
//! - [`validate`]: per-field rules (name, email, mobile number, city, message)
//! - [`inquiry`]: patient and hospital payloads and their datastore rows
//!
//! ## Example
//!
//! ```rust
//! use clinic_leads::{Field, HospitalInquiry, Inquiry};
//!
//! let mut inquiry = HospitalInquiry::default();
//! inquiry.set(Field::HospitalName, "City Care Hospital");
//!
//! let report = inquiry.validate();
//! assert!(!report.is_valid());
//! assert!(inquiry.missing_fields().contains(&Field::City));
//! ```

pub mod field;
pub mod inquiry;
pub mod validate;

pub use field::{Field, FieldError};
pub use inquiry::{
    HospitalInquiry, Inquiry, PatientInquiry, HOSPITAL_ENDPOINT, HOSPITAL_TABLE, PATIENT_ENDPOINT,
    PATIENT_TABLE, WEBSITE_SOURCE,
};
pub use validate::ValidationReport;
