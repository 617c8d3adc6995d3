//! Driving port for the registration use-case.
//!
//! Inbound adapters (HTTP handlers, the demo CLI) call this port so they never
//! depend on the concrete gateways wired behind the orchestrator.

use async_trait::async_trait;

use crate::domain::{RegistrationError, RegistrationReceipt, RegistrationRecord};

/// Domain use-case port for account registration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRegistration: Send + Sync {
    /// Run the registration pipeline for `record`.
    ///
    /// Always returns a value: a receipt, or exactly one classified error.
    async fn register(
        &self,
        record: &RegistrationRecord,
    ) -> Result<RegistrationReceipt, RegistrationError>;
}
