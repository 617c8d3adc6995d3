//! Registration API handler.
//!
//! ```text
//! POST /api/v1/registrations {"username":"john_doe","email":"john@example.com","password":"securepassword"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{RegistrationErrorPayload, RegistrationReceipt, RegistrationRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::state::HttpState;

/// Registration request body for `POST /api/v1/registrations`.
///
/// Absent fields decode as empty strings so the validator reports them.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[schema(example = "john_doe")]
    pub username: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    #[schema(example = "securepassword", format = Password)]
    pub password: String,
}

impl From<RegistrationRequest> for RegistrationRecord {
    fn from(value: RegistrationRequest) -> Self {
        Self::new(value.username, value.email, value.password)
    }
}

/// Body returned when a registration succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub username: String,
    pub email: String,
    /// Report line for the run.
    #[schema(example = "User registered successfully.")]
    pub message: String,
}

impl From<RegistrationReceipt> for RegistrationResponse {
    fn from(receipt: RegistrationReceipt) -> Self {
        let message = receipt.report_line().to_owned();
        Self {
            username: receipt.username,
            email: receipt.email,
            message,
        }
    }
}

/// Register an account: validate, persist, then send a welcome email.
#[utoipa::path(
    post,
    path = "/api/v1/registrations",
    request_body = RegistrationRequest,
    responses(
        (status = 201, description = "Account registered", body = RegistrationResponse),
        (status = 400, description = "Validation failed", body = RegistrationErrorPayload),
        (status = 500, description = "Unexpected failure", body = RegistrationErrorPayload),
        (status = 502, description = "Welcome email failed", body = RegistrationErrorPayload),
        (status = 503, description = "Account could not be saved", body = RegistrationErrorPayload)
    ),
    tags = ["registrations"],
    operation_id = "registerAccount"
)]
#[post("/registrations")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegistrationRequest>,
) -> ApiResult<HttpResponse> {
    let record = RegistrationRecord::from(payload.into_inner());
    let receipt = state.registration.register(&record).await?;
    Ok(HttpResponse::Created().json(RegistrationResponse::from(receipt)))
}

/// JSON extractor settings for the registration scope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

#[cfg(test)]
#[path = "registrations_tests.rs"]
mod tests;
