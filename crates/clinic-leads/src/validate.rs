//! Field rules shared by the browser forms and the submit endpoints

use once_cell::sync::Lazy;
use regex::Regex;

use crate::field::{Field, FieldError};

/// Minimum characters for any name field (after trimming)
pub const NAME_MIN_CHARS: usize = 2;

/// Minimum characters for the message (after trimming)
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Number of digits in a mobile number
pub const PHONE_DIGITS: usize = 10;

/// Leading digits accepted for mobile numbers
pub const MOBILE_PREFIXES: [char; 4] = ['6', '7', '8', '9'];

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validate a person or organisation name
pub fn validate_name(name: &str) -> Result<(), FieldError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FieldError::NameRequired);
    }
    if trimmed.chars().count() < NAME_MIN_CHARS {
        return Err(FieldError::NameTooShort { min: NAME_MIN_CHARS });
    }
    Ok(())
}

/// Validate an email address
///
/// The pattern is applied to the raw value, so surrounding whitespace is
/// rejected as invalid rather than silently trimmed.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.trim().is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

/// Validate a mobile number; separators and spaces are ignored
pub fn validate_phone(phone: &str) -> Result<(), FieldError> {
    let digits = phone_digits(phone);
    let Some(first) = digits.chars().next() else {
        return Err(FieldError::PhoneRequired);
    };
    if digits.len() != PHONE_DIGITS {
        return Err(FieldError::PhoneLength { expected: PHONE_DIGITS });
    }
    if !MOBILE_PREFIXES.contains(&first) {
        return Err(FieldError::PhoneNotMobile);
    }
    Ok(())
}

/// Validate the city field
pub fn validate_city(city: &str) -> Result<(), FieldError> {
    if city.trim().is_empty() {
        return Err(FieldError::CityRequired);
    }
    Ok(())
}

/// Validate the free-text message
pub fn validate_message(message: &str) -> Result<(), FieldError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(FieldError::MessageRequired);
    }
    if trimmed.chars().count() < MESSAGE_MIN_CHARS {
        return Err(FieldError::MessageTooShort { min: MESSAGE_MIN_CHARS });
    }
    Ok(())
}

/// ASCII digits of a phone number, in order
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Outcome of validating a whole form, in field order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<(Field, FieldError)>,
}

impl ValidationReport {
    /// Create an empty (passing) report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result of checking one field
    pub fn record(&mut self, field: Field, result: Result<(), FieldError>) {
        if let Err(error) = result {
            self.errors.push((field, error));
        }
    }

    /// True when no field failed
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error for a specific field, if it failed
    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| *e)
    }

    /// First failing field, in form order
    pub fn first(&self) -> Option<(Field, FieldError)> {
        self.errors.first().copied()
    }

    /// All failures, in form order
    pub fn errors(&self) -> &[(Field, FieldError)] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_name(""), Err(FieldError::NameRequired));
        assert_eq!(validate_name("   "), Err(FieldError::NameRequired));
        assert_eq!(validate_name(" A "), Err(FieldError::NameTooShort { min: 2 }));
        assert!(validate_name("Al").is_ok());
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_email(" "), Err(FieldError::EmailRequired));
        assert_eq!(validate_email("someone"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@b"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a b@c.de"), Err(FieldError::EmailInvalid));
        assert!(validate_email("ward.desk@hospital.in").is_ok());
    }

    #[test]
    fn test_phone_rules() {
        assert_eq!(validate_phone("--"), Err(FieldError::PhoneRequired));
        assert_eq!(
            validate_phone("98765"),
            Err(FieldError::PhoneLength { expected: 10 })
        );
        assert_eq!(validate_phone("1234567890"), Err(FieldError::PhoneNotMobile));
        assert!(validate_phone("98765 43210").is_ok());
        assert!(validate_phone("(701) 234-5678").is_ok());
    }

    #[test]
    fn test_phone_digits_strips_separators() {
        assert_eq!(phone_digits("+91 98765-43210"), "919876543210");
    }

    #[test]
    fn test_city_and_message_rules() {
        assert_eq!(validate_city("\t"), Err(FieldError::CityRequired));
        assert!(validate_city("Hisar").is_ok());
        assert_eq!(validate_message(""), Err(FieldError::MessageRequired));
        assert_eq!(
            validate_message("  too short "),
            Err(FieldError::MessageTooShort { min: 10 })
        );
        assert!(validate_message("Need an appointment next week").is_ok());
    }

    #[test]
    fn test_report_keeps_field_order() {
        let mut report = ValidationReport::new();
        report.record(Field::Name, Ok(()));
        report.record(Field::Email, Err(FieldError::EmailInvalid));
        report.record(Field::City, Err(FieldError::CityRequired));

        assert!(!report.is_valid());
        assert_eq!(report.first(), Some((Field::Email, FieldError::EmailInvalid)));
        assert_eq!(report.error_for(Field::City), Some(FieldError::CityRequired));
        assert_eq!(report.error_for(Field::Name), None);
        assert_eq!(report.errors().len(), 2);
    }
}
