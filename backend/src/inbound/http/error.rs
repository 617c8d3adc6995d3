//! HTTP adapter mapping for registration failures.
//!
//! Purpose: keep [`RegistrationError`] free of HTTP concerns while letting
//! Actix handlers turn a failed registration into a JSON payload and a
//! status code chosen by failure kind.

use actix_web::{
    HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode,
};
use tracing::debug;

use crate::domain::{
    RegistrationError, RegistrationErrorKind, RegistrationErrorPayload, TRACE_ID_HEADER, TraceId,
};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, RegistrationError>;

/// Message sent to clients in place of unexpected failure details.
pub const REDACTED_MESSAGE: &str = "Internal server error";

fn status_for(kind: RegistrationErrorKind) -> StatusCode {
    match kind {
        RegistrationErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        RegistrationErrorKind::PersistenceFailure => StatusCode::SERVICE_UNAVAILABLE,
        RegistrationErrorKind::NotificationFailure => StatusCode::BAD_GATEWAY,
        RegistrationErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_unexpected(error: &RegistrationError) -> RegistrationError {
    match error.kind() {
        RegistrationErrorKind::Unexpected => RegistrationError::unexpected(REDACTED_MESSAGE),
        _ => error.clone(),
    }
}

impl ResponseError for RegistrationError {
    fn status_code(&self) -> StatusCode {
        status_for(self.kind())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = TraceId::current() {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }

        builder.json(RegistrationErrorPayload::from(redact_if_unexpected(self)))
    }
}

/// Turn malformed JSON bodies into validation failures.
///
/// Registered through `web::JsonConfig::error_handler` so body errors share
/// the registration error schema.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected registration body");
    RegistrationError::invalid_input(format!("Malformed request body: {err}")).into()
}

#[cfg(test)]
mod tests;
