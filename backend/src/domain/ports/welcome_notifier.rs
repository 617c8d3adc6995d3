//! Port for sending the welcome message to a newly registered account.

use async_trait::async_trait;

use crate::domain::RegistrationRecord;

use super::define_port_error;

define_port_error! {
    /// Errors raised by welcome notification adapters.
    pub enum WelcomeNotificationError {
        /// The delivery service could not be reached.
        Unavailable { message: String } => "notification service unavailable: {message}",
        /// The delivery service refused the message.
        Rejected { message: String } => "welcome message rejected: {message}",
    }
}

/// Notification gateway for welcome messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WelcomeNotifier: Send + Sync {
    /// Deliver the welcome message for `record`.
    async fn send_welcome(&self, record: &RegistrationRecord)
    -> Result<(), WelcomeNotificationError>;
}

/// Fixture notifier that accepts every message without sending anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureWelcomeNotifier;

#[async_trait]
impl WelcomeNotifier for FixtureWelcomeNotifier {
    async fn send_welcome(
        &self,
        _record: &RegistrationRecord,
    ) -> Result<(), WelcomeNotificationError> {
        Ok(())
    }
}
