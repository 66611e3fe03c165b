//! Inquiry payloads and the datastore rows they become
//!
//! Payloads use camelCase on the wire (what the forms post); rows use the
//! snake_case column names of the hosted tables.

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::validate::ValidationReport;

/// Table receiving patient inquiries
pub const PATIENT_TABLE: &str = "patient_inquiries";

/// Table receiving hospital inquiries
pub const HOSPITAL_TABLE: &str = "hospital_inquiries";

/// Source tag recorded with hospital inquiries
pub const WEBSITE_SOURCE: &str = "website";

/// Endpoint accepting patient inquiries
pub const PATIENT_ENDPOINT: &str = "/api/submit-patient-inquiry";

/// Endpoint accepting hospital inquiries
pub const HOSPITAL_ENDPOINT: &str = "/api/submit-hospital-inquiry";

/// Common behaviour of the two inquiry forms
pub trait Inquiry: Clone + Default {
    /// Datastore table the inquiry is inserted into
    const TABLE: &'static str;

    /// Path the form posts to
    const ENDPOINT: &'static str;

    /// Fields in form order
    const FIELDS: &'static [Field];

    /// Current value of a field (`None` if the field is not part of this form)
    fn get(&self, field: Field) -> Option<&str>;

    /// Set a field value; returns false if the field is not part of this form
    fn set(&mut self, field: Field, value: &str) -> bool;

    /// Datastore row for this inquiry
    fn to_row(&self) -> serde_json::Value;

    /// Fields that are blank after trimming
    fn missing_fields(&self) -> Vec<Field> {
        Self::FIELDS
            .iter()
            .copied()
            .filter(|f| self.get(*f).map(|v| v.trim().is_empty()).unwrap_or(true))
            .collect()
    }

    /// Run every field rule, in form order
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        for field in Self::FIELDS {
            let value = self.get(*field).unwrap_or_default();
            report.record(*field, field.check(value));
        }
        report
    }
}

/// Inquiry posted from the patient tab of the contact form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatientInquiry {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// Row layout of `patient_inquiries`
#[derive(Debug, Serialize)]
struct PatientRow<'a> {
    name: &'a str,
    phone: &'a str,
    email: &'a str,
    message: &'a str,
}

impl Inquiry for PatientInquiry {
    const TABLE: &'static str = PATIENT_TABLE;
    const ENDPOINT: &'static str = PATIENT_ENDPOINT;
    const FIELDS: &'static [Field] = &[Field::Name, Field::Phone, Field::Email, Field::Message];

    fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Phone => Some(&self.phone),
            Field::Email => Some(&self.email),
            Field::Message => Some(&self.message),
            _ => None,
        }
    }

    fn set(&mut self, field: Field, value: &str) -> bool {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }

    fn to_row(&self) -> serde_json::Value {
        serde_json::json!(PatientRow {
            name: &self.name,
            phone: &self.phone,
            email: &self.email,
            message: &self.message,
        })
    }
}

/// Inquiry posted from the hospital tab of the contact form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HospitalInquiry {
    pub hospital_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub message: String,
}

/// Row layout of `hospital_inquiries`
#[derive(Debug, Serialize)]
struct HospitalRow<'a> {
    hospital_name: &'a str,
    contact_person: &'a str,
    email: &'a str,
    phone: &'a str,
    city: &'a str,
    message: &'a str,
    source: &'a str,
}

impl Inquiry for HospitalInquiry {
    const TABLE: &'static str = HOSPITAL_TABLE;
    const ENDPOINT: &'static str = HOSPITAL_ENDPOINT;
    const FIELDS: &'static [Field] = &[
        Field::HospitalName,
        Field::ContactPerson,
        Field::Email,
        Field::Phone,
        Field::City,
        Field::Message,
    ];

    fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::HospitalName => Some(&self.hospital_name),
            Field::ContactPerson => Some(&self.contact_person),
            Field::Email => Some(&self.email),
            Field::Phone => Some(&self.phone),
            Field::City => Some(&self.city),
            Field::Message => Some(&self.message),
            _ => None,
        }
    }

    fn set(&mut self, field: Field, value: &str) -> bool {
        let slot = match field {
            Field::HospitalName => &mut self.hospital_name,
            Field::ContactPerson => &mut self.contact_person,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::City => &mut self.city,
            Field::Message => &mut self.message,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }

    fn to_row(&self) -> serde_json::Value {
        serde_json::json!(HospitalRow {
            hospital_name: &self.hospital_name,
            contact_person: &self.contact_person,
            email: &self.email,
            phone: &self.phone,
            city: &self.city,
            message: &self.message,
            source: WEBSITE_SOURCE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldError;

    fn hospital() -> HospitalInquiry {
        HospitalInquiry {
            hospital_name: "City Care Hospital".to_string(),
            contact_person: "Meera Rao".to_string(),
            email: "desk@citycare.in".to_string(),
            phone: "9876543210".to_string(),
            city: "Hisar".to_string(),
            message: "Looking to set up a weekly GI surgery OPD.".to_string(),
        }
    }

    #[test]
    fn test_hospital_payload_uses_camel_case() {
        let parsed: HospitalInquiry = serde_json::from_str(
            r#"{"hospitalName":"H","contactPerson":"C","email":"e","phone":"p","city":"c","message":"m"}"#,
        )
        .unwrap();
        assert_eq!(parsed.hospital_name, "H");
        assert_eq!(parsed.contact_person, "C");
    }

    #[test]
    fn test_missing_keys_deserialize_as_empty() {
        let parsed: PatientInquiry = serde_json::from_str(r#"{"name":"Ravi"}"#).unwrap();
        assert_eq!(parsed.name, "Ravi");
        assert!(parsed.phone.is_empty());
        assert_eq!(
            parsed.missing_fields(),
            vec![Field::Phone, Field::Email, Field::Message]
        );
    }

    #[test]
    fn test_hospital_row_is_snake_case_with_source() {
        let row = hospital().to_row();
        assert_eq!(row["hospital_name"], "City Care Hospital");
        assert_eq!(row["contact_person"], "Meera Rao");
        assert_eq!(row["source"], "website");
        assert!(row.get("hospitalName").is_none());
    }

    #[test]
    fn test_patient_row_has_no_source() {
        let row = PatientInquiry {
            name: "Ravi".to_string(),
            ..Default::default()
        }
        .to_row();
        assert_eq!(row["name"], "Ravi");
        assert!(row.get("source").is_none());
    }

    #[test]
    fn test_validate_reports_city() {
        let mut inquiry = hospital();
        inquiry.city = "  ".to_string();

        let report = inquiry.validate();
        assert_eq!(report.errors(), &[(Field::City, FieldError::CityRequired)]);
        assert_eq!(inquiry.missing_fields(), vec![Field::City]);
    }

    #[test]
    fn test_set_rejects_foreign_fields() {
        let mut patient = PatientInquiry::default();
        assert!(!patient.set(Field::City, "Hisar"));
        assert!(patient.set(Field::Email, "a@b.co"));
        assert_eq!(patient.get(Field::Email), Some("a@b.co"));
        assert_eq!(patient.get(Field::City), None);
    }
}
