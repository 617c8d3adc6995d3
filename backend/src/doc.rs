//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the registration endpoint, the health probes and the
//! request, response and error schemas. Swagger UI serves it in debug builds
//! and `openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::domain::{RegistrationErrorKind, RegistrationErrorPayload};
use crate::inbound::http::registrations::{RegistrationRequest, RegistrationResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registration API",
        description = "Account registration with validation, persistence and a welcome email."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::registrations::register,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RegistrationRequest,
        RegistrationResponse,
        RegistrationErrorPayload,
        RegistrationErrorKind
    )),
    tags(
        (name = "registrations", description = "Account registration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
