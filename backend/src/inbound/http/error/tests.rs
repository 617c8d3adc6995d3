//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn payload_of(response: HttpResponse) -> RegistrationErrorPayload {
    let bytes = to_bytes(response.into_body()).await.expect("read body");
    serde_json::from_slice(&bytes).expect("error payload")
}

#[rstest]
#[case(RegistrationError::invalid_input("Invalid email format."), StatusCode::BAD_REQUEST)]
#[case(RegistrationError::persistence_failure(), StatusCode::SERVICE_UNAVAILABLE)]
#[case(RegistrationError::notification_failure(), StatusCode::BAD_GATEWAY)]
#[case(RegistrationError::unexpected("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_kind(#[case] error: RegistrationError, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn unexpected_errors_are_redacted_for_clients() {
    let response = ResponseError::error_response(&RegistrationError::unexpected("secret detail"));
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let payload = payload_of(response).await;
    assert_eq!(payload.kind, RegistrationErrorKind::Unexpected);
    assert_eq!(payload.message, REDACTED_MESSAGE);
}

#[rstest]
#[case(RegistrationError::invalid_input("All fields are required."))]
#[case(RegistrationError::persistence_failure())]
#[case(RegistrationError::notification_failure())]
#[actix_web::test]
async fn classified_errors_keep_their_message(#[case] error: RegistrationError) {
    let payload = payload_of(ResponseError::error_response(&error)).await;
    assert_eq!(payload.kind, error.kind());
    assert_eq!(payload.message, error.message());
}

#[rstest]
#[actix_web::test]
async fn trace_id_in_scope_is_echoed() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid trace id");
    let response = TraceId::scope(trace_id, async {
        ResponseError::error_response(&RegistrationError::persistence_failure())
    })
    .await;

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok());
    assert_eq!(header, Some(TRACE_ID));
}

#[rstest]
#[actix_web::test]
async fn missing_trace_id_omits_header() {
    let response = ResponseError::error_response(&RegistrationError::notification_failure());
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
}

#[test]
fn redaction_leaves_classified_errors_untouched() {
    let error = RegistrationError::invalid_input("Invalid email format.");
    assert_eq!(redact_if_unexpected(&error), error);
}
