//! Builders wiring the registration use-case to its outbound adapters.

use std::sync::Arc;

use actix_web::web;

use registration::domain::RegistrationService;
use registration::inbound::http::state::HttpState;
use registration::outbound::notification::TracingWelcomeNotifier;
use registration::outbound::persistence::InMemoryAccountRepository;

use super::ServerConfig;

/// Build the HTTP state backed by the in-process gateways.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let accounts = Arc::new(InMemoryAccountRepository::with_simulation(config.persistence));
    let notifier = Arc::new(TracingWelcomeNotifier::with_simulation(config.notification));
    let service = RegistrationService::new(accounts, notifier);
    web::Data::new(HttpState::new(Arc::new(service)))
}
