//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the registration driving port and stay testable without real gateways.

use std::sync::Arc;

use crate::domain::ports::AccountRegistration;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn AccountRegistration>,
}

impl HttpState {
    /// Construct state from the registration use-case.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use registration::domain::RegistrationService;
    /// use registration::domain::ports::{FixtureAccountRepository, FixtureWelcomeNotifier};
    /// use registration::inbound::http::state::HttpState;
    ///
    /// let service = RegistrationService::new(
    ///     Arc::new(FixtureAccountRepository),
    ///     Arc::new(FixtureWelcomeNotifier),
    /// );
    /// let _state = HttpState::new(Arc::new(service));
    /// ```
    pub fn new(registration: Arc<dyn AccountRegistration>) -> Self {
        Self { registration }
    }
}
