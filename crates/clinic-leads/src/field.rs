//! Form fields and per-field validation errors

use core::fmt;
use serde::Serialize;

/// A field of one of the inquiry forms
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Patient name
    Name,
    /// Hospital or clinic name
    HospitalName,
    /// Contact person at the hospital
    ContactPerson,
    /// Email address
    Email,
    /// Mobile phone number
    Phone,
    /// City of the hospital
    City,
    /// Free-text message
    Message,
}

impl Field {
    /// Wire name of the field (camelCase, as posted by the forms)
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::HospitalName => "hospitalName",
            Field::ContactPerson => "contactPerson",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::City => "city",
            Field::Message => "message",
        }
    }

    /// Parse a wire name back into a field
    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "name" => Some(Field::Name),
            "hospitalName" => Some(Field::HospitalName),
            "contactPerson" => Some(Field::ContactPerson),
            "email" => Some(Field::Email),
            "phone" => Some(Field::Phone),
            "city" => Some(Field::City),
            "message" => Some(Field::Message),
            _ => None,
        }
    }

    /// Check a value against this field's rule
    pub fn check(self, value: &str) -> Result<(), FieldError> {
        match self {
            Field::Name | Field::HospitalName | Field::ContactPerson => {
                crate::validate::validate_name(value)
            }
            Field::Email => crate::validate::validate_email(value),
            Field::Phone => crate::validate::validate_phone(value),
            Field::City => crate::validate::validate_city(value),
            Field::Message => crate::validate::validate_message(value),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a single field value is rejected
///
/// `Display` yields the message shown inline next to the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// Name is blank
    NameRequired,
    /// Name shorter than the minimum
    NameTooShort { min: usize },
    /// Email is blank
    EmailRequired,
    /// Email does not look like `local@domain.tld`
    EmailInvalid,
    /// Phone has no digits at all
    PhoneRequired,
    /// Phone does not have exactly the expected number of digits
    PhoneLength { expected: usize },
    /// Phone does not start with a mobile prefix
    PhoneNotMobile,
    /// City is blank
    CityRequired,
    /// Message is blank
    MessageRequired,
    /// Message shorter than the minimum
    MessageTooShort { min: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::NameRequired => write!(f, "Please enter your name"),
            FieldError::NameTooShort { min } => {
                write!(f, "Name must be at least {} characters", min)
            }
            FieldError::EmailRequired => write!(f, "Email is required"),
            FieldError::EmailInvalid => write!(f, "Please enter a valid email"),
            FieldError::PhoneRequired => write!(f, "Phone number is required"),
            FieldError::PhoneLength { expected } => {
                write!(f, "Enter {}-digit mobile number", expected)
            }
            FieldError::PhoneNotMobile => write!(f, "Invalid mobile number"),
            FieldError::CityRequired => write!(f, "City is required"),
            FieldError::MessageRequired => write!(f, "Message is required"),
            FieldError::MessageTooShort { min } => {
                write!(f, "Message too short (min {} characters)", min)
            }
        }
    }
}

impl std::error::Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip_through_wire_names() {
        for field in [
            Field::Name,
            Field::HospitalName,
            Field::ContactPerson,
            Field::Email,
            Field::Phone,
            Field::City,
            Field::Message,
        ] {
            assert_eq!(Field::from_name(field.as_str()), Some(field));
        }
        assert_eq!(Field::from_name("hospital_name"), None);
    }

    #[test]
    fn test_field_error_messages() {
        assert_eq!(
            FieldError::NameTooShort { min: 2 }.to_string(),
            "Name must be at least 2 characters"
        );
        assert_eq!(
            FieldError::PhoneLength { expected: 10 }.to_string(),
            "Enter 10-digit mobile number"
        );
        assert_eq!(
            FieldError::MessageTooShort { min: 10 }.to_string(),
            "Message too short (min 10 characters)"
        );
        assert_eq!(FieldError::CityRequired.to_string(), "City is required");
    }

    #[test]
    fn test_name_like_fields_share_the_name_rule() {
        assert_eq!(Field::HospitalName.check(" "), Err(FieldError::NameRequired));
        assert_eq!(
            Field::ContactPerson.check("A"),
            Err(FieldError::NameTooShort { min: 2 })
        );
        assert!(Field::Name.check("Asha").is_ok());
    }
}
