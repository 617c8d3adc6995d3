//! Domain primitives and the registration use-case.
//!
//! Purpose: keep the registration pipeline free of transport and storage
//! details. Inbound adapters call the [`ports::AccountRegistration`] port;
//! outbound adapters implement the gateway ports.
//!
//! Public surface:
//! - RegistrationRecord: candidate account submitted by a caller.
//! - RegistrationError / RegistrationErrorKind: closed failure taxonomy.
//! - validate_registration / RecordValidator: the validation stage.
//! - RegistrationState: pipeline state machine.
//! - RegistrationService: orchestrator implementing the driving port.

pub mod ports;
pub mod registration;
pub mod registration_error;
pub mod registration_service;
pub mod registration_state;
pub mod registration_validation;
pub mod trace_id;

pub use self::registration::{REGISTRATION_SUCCESS_LINE, RegistrationReceipt, RegistrationRecord};
pub use self::registration_error::{
    NOTIFICATION_FAILURE_MESSAGE, PERSISTENCE_FAILURE_MESSAGE, RegistrationError,
    RegistrationErrorKind, RegistrationErrorPayload, RegistrationErrorPayloadError,
};
pub use self::registration_service::{RegistrationService, report_line};
pub use self::registration_state::RegistrationState;
pub use self::registration_validation::{
    INVALID_EMAIL_MESSAGE, MISSING_FIELDS_MESSAGE, PASSWORD_MIN_LENGTH, RecordValidator,
    SHORT_PASSWORD_MESSAGE, StandardRecordValidator, validate_registration,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
