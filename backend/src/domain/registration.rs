//! Registration input and success values.
//!
//! A [`RegistrationRecord`] is accepted as the caller supplied it; deciding
//! whether its contents are acceptable is the validation stage's job, so the
//! constructor performs no checks.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeroize::Zeroizing;

/// Line reported for every successful registration.
pub const REGISTRATION_SUCCESS_LINE: &str = "User registered successfully.";

/// Candidate account submitted for registration.
///
/// ## Invariants
/// - Fields are never mutated after construction; the pipeline only borrows
///   the record.
/// - The password buffer is zeroed when the record is dropped and never
///   appears in `Debug` output.
///
/// # Examples
/// ```
/// use registration::domain::RegistrationRecord;
///
/// let record = RegistrationRecord::new("john_doe", "john@example.com", "securepassword");
/// assert_eq!(record.username(), "john_doe");
/// assert!(!format!("{record:?}").contains("securepassword"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationRecord {
    username: String,
    email: String,
    password: Zeroizing<String>,
}

impl RegistrationRecord {
    /// Capture the raw registration fields.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Requested account name.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Address the welcome message is sent to.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password exactly as submitted.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for RegistrationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRecord")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Value returned once every stage has completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationReceipt {
    /// Registered account name.
    #[schema(example = "john_doe")]
    pub username: String,
    /// Address the welcome message went to.
    #[schema(example = "john@example.com")]
    pub email: String,
}

impl RegistrationReceipt {
    /// Build a receipt for a record that completed the pipeline.
    pub fn for_record(record: &RegistrationRecord) -> Self {
        Self {
            username: record.username().to_owned(),
            email: record.email().to_owned(),
        }
    }

    /// Human-readable outcome line.
    pub const fn report_line(&self) -> &'static str {
        REGISTRATION_SUCCESS_LINE
    }
}
