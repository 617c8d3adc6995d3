//! Failure taxonomy for the registration pipeline.
//!
//! Every failed run ends in exactly one [`RegistrationError`]. The kind is
//! exposed as data through [`RegistrationError::kind`] so callers branch on
//! the tag rather than on the concrete source of the failure. The type is
//! transport agnostic; inbound adapters decide how each kind is presented.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message carried by every [`RegistrationError::PersistenceFailure`].
pub const PERSISTENCE_FAILURE_MESSAGE: &str = "Failed to save user to the database.";
/// Message carried by every [`RegistrationError::NotificationFailure`].
pub const NOTIFICATION_FAILURE_MESSAGE: &str = "Failed to send welcome email.";

/// Discriminator for [`RegistrationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationErrorKind {
    /// The record failed validation.
    InvalidInput,
    /// The persistence gateway reported a failure.
    PersistenceFailure,
    /// The notification gateway reported a failure.
    NotificationFailure,
    /// Any other failure raised while a stage was running.
    Unexpected,
}

impl RegistrationErrorKind {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::PersistenceFailure => "persistence_failure",
            Self::NotificationFailure => "notification_failure",
            Self::Unexpected => "unexpected",
        }
    }

    /// Prefix used in the report line, e.g. `Database` in
    /// `Database Error: ...`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InvalidInput => "Validation",
            Self::PersistenceFailure => "Database",
            Self::NotificationFailure => "Email Service",
            Self::Unexpected => "Unexpected",
        }
    }
}

impl fmt::Display for RegistrationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Terminal failure of a registration run.
///
/// Only [`RegistrationError::InvalidInput`] and
/// [`RegistrationError::Unexpected`] carry a caller-supplied message. Gateway
/// failures always carry their fixed stage message; whatever the gateway
/// reported is dropped at this layer.
///
/// # Examples
/// ```
/// use registration::domain::{RegistrationError, RegistrationErrorKind};
///
/// let err = RegistrationError::persistence_failure();
/// assert_eq!(err.kind(), RegistrationErrorKind::PersistenceFailure);
/// assert_eq!(err.report_line(), "Database Error: Failed to save user to the database.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(try_from = "RegistrationErrorPayload", into = "RegistrationErrorPayload")]
pub enum RegistrationError {
    /// Validation rejected the record.
    #[error("{message}")]
    InvalidInput {
        /// Rule that was violated.
        message: String,
    },
    /// Saving the account failed.
    #[error("Failed to save user to the database.")]
    PersistenceFailure,
    /// Sending the welcome message failed.
    #[error("Failed to send welcome email.")]
    NotificationFailure,
    /// A stage failed in a way no other kind describes.
    #[error("{message}")]
    Unexpected {
        /// Message of the original failure.
        message: String,
    },
}

impl RegistrationError {
    /// Validation failure with the violated rule's message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Persistence gateway failure.
    #[must_use]
    pub const fn persistence_failure() -> Self {
        Self::PersistenceFailure
    }

    /// Notification gateway failure.
    #[must_use]
    pub const fn notification_failure() -> Self {
        Self::NotificationFailure
    }

    /// Unclassified failure, keeping the original message.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Tag identifying which kind of failure this is.
    #[must_use]
    pub const fn kind(&self) -> RegistrationErrorKind {
        match self {
            Self::InvalidInput { .. } => RegistrationErrorKind::InvalidInput,
            Self::PersistenceFailure => RegistrationErrorKind::PersistenceFailure,
            Self::NotificationFailure => RegistrationErrorKind::NotificationFailure,
            Self::Unexpected { .. } => RegistrationErrorKind::Unexpected,
        }
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput { message } | Self::Unexpected { message } => message.as_str(),
            Self::PersistenceFailure => PERSISTENCE_FAILURE_MESSAGE,
            Self::NotificationFailure => NOTIFICATION_FAILURE_MESSAGE,
        }
    }

    /// Outcome line in the `<Kind> Error: <message>` form.
    #[must_use]
    pub fn report_line(&self) -> String {
        format!("{} Error: {}", self.kind().label(), self.message())
    }
}

/// Errors raised when a serialised payload cannot be turned back into a
/// [`RegistrationError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationErrorPayloadError {
    /// `invalid_input` and `unexpected` payloads need a message.
    #[error("{kind} errors require a non-empty message")]
    EmptyMessage {
        /// Kind whose message was missing.
        kind: RegistrationErrorKind,
    },
}

/// Wire form of [`RegistrationError`].
///
/// The `message` of fixed-message kinds is informational; decoding rebuilds
/// those kinds from the tag alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationErrorPayload {
    /// Failure kind.
    #[schema(example = "invalid_input")]
    pub kind: RegistrationErrorKind,
    /// Human-readable message.
    #[schema(example = "Invalid email format.")]
    #[serde(default)]
    pub message: String,
}

impl From<RegistrationError> for RegistrationErrorPayload {
    fn from(value: RegistrationError) -> Self {
        let kind = value.kind();
        let message = match value {
            RegistrationError::InvalidInput { message }
            | RegistrationError::Unexpected { message } => message,
            RegistrationError::PersistenceFailure => PERSISTENCE_FAILURE_MESSAGE.to_owned(),
            RegistrationError::NotificationFailure => NOTIFICATION_FAILURE_MESSAGE.to_owned(),
        };
        Self { kind, message }
    }
}

impl TryFrom<RegistrationErrorPayload> for RegistrationError {
    type Error = RegistrationErrorPayloadError;

    fn try_from(value: RegistrationErrorPayload) -> Result<Self, Self::Error> {
        let RegistrationErrorPayload { kind, message } = value;
        let require_message = |message: String| {
            if message.trim().is_empty() {
                Err(RegistrationErrorPayloadError::EmptyMessage { kind })
            } else {
                Ok(message)
            }
        };

        match kind {
            RegistrationErrorKind::InvalidInput => {
                require_message(message).map(RegistrationError::invalid_input)
            }
            RegistrationErrorKind::Unexpected => {
                require_message(message).map(RegistrationError::unexpected)
            }
            RegistrationErrorKind::PersistenceFailure => Ok(RegistrationError::PersistenceFailure),
            RegistrationErrorKind::NotificationFailure => {
                Ok(RegistrationError::NotificationFailure)
            }
        }
    }
}
