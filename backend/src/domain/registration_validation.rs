//! Validation stage of the registration pipeline.
//!
//! Rules run in a fixed order and stop at the first violation, so a record
//! never produces more than one validation error.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::registration::RegistrationRecord;
use crate::domain::registration_error::RegistrationError;

/// Minimum password length, counted in characters.
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Message for a record with any empty field.
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required.";
/// Message for an email that does not look like an address.
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format.";
/// Message for a password below [`PASSWORD_MIN_LENGTH`].
pub const SHORT_PASSWORD_MESSAGE: &str = "Password must be at least 6 characters long.";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Unanchored: any `run@run.run` substring is enough.
        let pattern = r"\S+@\S+\.\S+";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Check a record against the registration rules.
///
/// # Examples
/// ```
/// use registration::domain::{RegistrationRecord, validate_registration};
///
/// let record = RegistrationRecord::new("alice", "alice@example.com", "123");
/// let error = validate_registration(&record).unwrap_err();
/// assert_eq!(error.message(), "Password must be at least 6 characters long.");
/// ```
pub fn validate_registration(record: &RegistrationRecord) -> Result<(), RegistrationError> {
    if record.username().is_empty() || record.email().is_empty() || record.password().is_empty() {
        return Err(RegistrationError::invalid_input(MISSING_FIELDS_MESSAGE));
    }

    if !email_regex().is_match(record.email()) {
        return Err(RegistrationError::invalid_input(INVALID_EMAIL_MESSAGE));
    }

    if record.password().chars().count() < PASSWORD_MIN_LENGTH {
        return Err(RegistrationError::invalid_input(SHORT_PASSWORD_MESSAGE));
    }

    Ok(())
}

/// Validation seam used by the registration orchestrator.
pub trait RecordValidator: Send + Sync {
    /// Accept the record or explain why it was rejected.
    fn validate(&self, record: &RegistrationRecord) -> Result<(), RegistrationError>;
}

/// Validator applying [`validate_registration`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRecordValidator;

impl RecordValidator for StandardRecordValidator {
    fn validate(&self, record: &RegistrationRecord) -> Result<(), RegistrationError> {
        validate_registration(record)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::RegistrationErrorKind;
    use rstest::rstest;

    fn rejection(username: &str, email: &str, password: &str) -> RegistrationError {
        let record = RegistrationRecord::new(username, email, password);
        validate_registration(&record).expect_err("record should be rejected")
    }

    #[rstest]
    #[case("", "john@example.com", "securepassword")]
    #[case("john_doe", "", "securepassword")]
    #[case("john_doe", "john@example.com", "")]
    #[case("", "", "")]
    fn empty_fields_are_rejected_first(
        #[case] username: &str,
        #[case] email: &str,
        #[case] password: &str,
    ) {
        let error = rejection(username, email, password);
        assert_eq!(error.kind(), RegistrationErrorKind::InvalidInput);
        assert_eq!(error.message(), MISSING_FIELDS_MESSAGE);
    }

    #[rstest]
    fn empty_password_wins_over_bad_email() {
        let error = rejection("jane_doe", "not-an-address", "");
        assert_eq!(error.message(), MISSING_FIELDS_MESSAGE);
    }

    #[rstest]
    #[case("jane_at_example.com")]
    #[case("jane@example")]
    #[case("@example.com")]
    #[case("jane@.com")]
    #[case("jane@example.")]
    #[case("jane @ example.com")]
    fn malformed_emails_are_rejected(#[case] email: &str) {
        let error = rejection("jane_doe", email, "securepassword");
        assert_eq!(error, RegistrationError::invalid_input(INVALID_EMAIL_MESSAGE));
    }

    #[rstest]
    fn bad_email_wins_over_short_password() {
        let error = rejection("jane_doe", "jane_at_example.com", "123");
        assert_eq!(error.message(), INVALID_EMAIL_MESSAGE);
    }

    #[rstest]
    #[case("1")]
    #[case("123")]
    #[case("12345")]
    #[case("ñññññ")]
    #[case("🔑🔑🔑")]
    fn short_passwords_are_rejected(#[case] password: &str) {
        let error = rejection("alice", "alice@example.com", password);
        assert_eq!(error, RegistrationError::invalid_input(SHORT_PASSWORD_MESSAGE));
    }

    #[rstest]
    #[case("john_doe", "john@example.com", "securepassword")]
    #[case("alice", "a@b.c", "123456")]
    #[case("bob", "contact: bob@mail.example.org", "ññññññ")]
    #[case("   ", "x@y.z", "      ")]
    fn valid_records_pass(#[case] username: &str, #[case] email: &str, #[case] password: &str) {
        let record = RegistrationRecord::new(username, email, password);
        assert_eq!(validate_registration(&record), Ok(()));
        assert_eq!(StandardRecordValidator.validate(&record), Ok(()));
    }

    #[rstest]
    fn password_length_counts_characters_not_code_units() {
        let three_astral = "🔑🔑🔑";
        assert_eq!(three_astral.encode_utf16().count(), 6);
        assert_eq!(
            rejection("alice", "alice@example.com", three_astral),
            RegistrationError::invalid_input(SHORT_PASSWORD_MESSAGE)
        );

        let record = RegistrationRecord::new("alice", "alice@example.com", "🔑🔑🔑🔑🔑🔑");
        assert_eq!(validate_registration(&record), Ok(()));
    }

    #[rstest]
    fn validation_is_deterministic() {
        let record = RegistrationRecord::new("jane_doe", "jane_at_example.com", "securepassword");
        let first = validate_registration(&record);
        let second = validate_registration(&record);
        assert_eq!(first, second);
    }
}
