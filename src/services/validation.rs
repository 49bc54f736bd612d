use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::{AppointmentRequest, FormField, FormSnapshot};

pub const PHONE_DIGITS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Reasons a submission is refused before it reaches the network. The display
/// text is shown to the visitor as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequired(FormField),

    #[error("Please enter a valid 10-digit phone number.")]
    InvalidPhone,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please select a future date for your appointment.")]
    PastDate,
}

pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Returns the bare digits when `value` carries exactly ten of them.
pub fn normalize_phone(value: &str) -> Option<String> {
    let digits = digits_only(value);
    (digits.len() == PHONE_DIGITS).then_some(digits)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn parse_preferred_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Runs the checks in order and stops at the first failure.
pub fn validate_form(
    form: &FormSnapshot,
    today: NaiveDate,
) -> Result<AppointmentRequest, ValidationError> {
    if let Some(missing) = FormField::REQUIRED.into_iter().find(|f| form.is_missing(*f)) {
        return Err(ValidationError::MissingRequired(missing));
    }

    if normalize_phone(form.get(FormField::PhoneNumber)).is_none() {
        return Err(ValidationError::InvalidPhone);
    }

    let email = form.optional(FormField::EmailAddress);
    if let Some(email) = &email {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
    }

    let preferred_date = form.get(FormField::PreferredDate);
    parse_preferred_date(preferred_date)
        .filter(|date| *date >= today)
        .ok_or(ValidationError::PastDate)?;

    Ok(AppointmentRequest {
        full_name: form.get(FormField::FullName).to_string(),
        phone_number: form.get(FormField::PhoneNumber).to_string(),
        email_address: email,
        preferred_date: preferred_date.to_string(),
        preferred_time: form.get(FormField::PreferredTime).to_string(),
        reason_for_visit: form.get(FormField::ReasonForVisit).to_string(),
        additional_information: form.optional(FormField::AdditionalInformation),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
    }

    fn valid_form() -> FormSnapshot {
        FormSnapshot::new()
            .with(FormField::FullName, "Jane Doe")
            .with(FormField::PhoneNumber, "123-456-7890")
            .with(FormField::PreferredDate, "2025-06-20")
            .with(FormField::PreferredTime, "10:00 AM")
            .with(FormField::ReasonForVisit, "Knee pain")
    }

    #[test]
    fn test_valid_form_passes() {
        let request = validate_form(&valid_form(), today()).unwrap();
        assert_eq!(request.full_name, "Jane Doe");
        assert_eq!(request.phone_number, "123-456-7890");
        assert_eq!(request.email_address, None);
        assert_eq!(request.preferred_date, "2025-06-20");
    }

    #[test]
    fn test_each_required_field_is_checked() {
        for field in FormField::REQUIRED {
            let form = valid_form().with(field, "");
            let err = validate_form(&form, today()).unwrap_err();
            assert_eq!(err, ValidationError::MissingRequired(field));
            assert_eq!(err.to_string(), "Please fill in all required fields.");
        }
    }

    #[test]
    fn test_whitespace_is_not_missing() {
        let form = valid_form().with(FormField::FullName, "   ");
        let request = validate_form(&form, today()).unwrap();
        assert_eq!(request.full_name, "   ");

        let form = valid_form().with(FormField::PhoneNumber, "   ");
        assert_eq!(
            validate_form(&form, today()).unwrap_err(),
            ValidationError::InvalidPhone
        );
    }

    #[test]
    fn test_date_kept_as_entered() {
        let form = valid_form().with(FormField::PreferredDate, "2025-6-20");
        let request = validate_form(&form, today()).unwrap();
        assert_eq!(request.preferred_date, "2025-6-20");
    }

    #[test]
    fn test_whitespace_email_fails_pattern() {
        let form = valid_form().with(FormField::EmailAddress, "   ");
        let err = validate_form(&form, today()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
        assert_eq!(err.to_string(), "Please enter a valid email address.");
    }

    #[test]
    fn test_missing_fields_reported_before_bad_phone() {
        let form = valid_form()
            .with(FormField::PhoneNumber, "12345")
            .with(FormField::ReasonForVisit, "");
        assert!(matches!(
            validate_form(&form, today()),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_phone_normalization() {
        assert_eq!(normalize_phone("123-456-7890").as_deref(), Some("1234567890"));
        assert_eq!(normalize_phone("(555) 123 4567").as_deref(), Some("5551234567"));
        assert_eq!(normalize_phone("12345"), None);
        assert_eq!(normalize_phone("123456789012"), None);
    }

    #[test]
    fn test_short_phone_rejected() {
        let form = valid_form().with(FormField::PhoneNumber, "12345");
        let err = validate_form(&form, today()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone);
        assert_eq!(err.to_string(), "Please enter a valid 10-digit phone number.");
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@clinic.co.in"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn test_email_optional_but_checked_when_present() {
        let empty = valid_form().with(FormField::EmailAddress, "");
        assert!(validate_form(&empty, today()).is_ok());

        let good = valid_form().with(FormField::EmailAddress, "a@b.com");
        let request = validate_form(&good, today()).unwrap();
        assert_eq!(request.email_address.as_deref(), Some("a@b.com"));

        let bad = valid_form().with(FormField::EmailAddress, "not-an-email");
        let err = validate_form(&bad, today()).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email address.");
    }

    #[test]
    fn test_today_passes_yesterday_fails() {
        let form = valid_form().with(FormField::PreferredDate, "2025-06-16");
        assert!(validate_form(&form, today()).is_ok());

        let form = valid_form().with(FormField::PreferredDate, "2025-06-15");
        let err = validate_form(&form, today()).unwrap_err();
        assert_eq!(err, ValidationError::PastDate);
        assert_eq!(
            err.to_string(),
            "Please select a future date for your appointment."
        );
    }

    #[test]
    fn test_unparseable_date_rejected() {
        let form = valid_form().with(FormField::PreferredDate, "next tuesday");
        assert_eq!(validate_form(&form, today()), Err(ValidationError::PastDate));
    }
}
