//! Welcome notifier that logs deliveries instead of sending mail.
//!
//! Every delivered message is appended to an in-memory outbox so callers can
//! check what would have been sent.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::RegistrationRecord;
use crate::domain::ports::{WelcomeNotificationError, WelcomeNotifier};
use crate::outbound::GatewaySimulation;

const SIMULATED_OUTAGE_MESSAGE: &str = "Email service is down.";

/// Notifier that records welcome messages and emits a log event per delivery.
#[derive(Debug, Default)]
pub struct TracingWelcomeNotifier {
    outbox: Mutex<Vec<String>>,
    simulation: GatewaySimulation,
    attempts: AtomicUsize,
}

impl TracingWelcomeNotifier {
    /// Create a healthy notifier with an empty outbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a notifier that follows `simulation`.
    #[must_use]
    pub fn with_simulation(simulation: GatewaySimulation) -> Self {
        Self {
            simulation,
            ..Self::default()
        }
    }

    /// Number of delivery attempts, successful or not.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Addresses that received a welcome message, in delivery order.
    pub async fn delivered(&self) -> Vec<String> {
        self.outbox.lock().await.clone()
    }
}

#[async_trait]
impl WelcomeNotifier for TracingWelcomeNotifier {
    async fn send_welcome(
        &self,
        record: &RegistrationRecord,
    ) -> Result<(), WelcomeNotificationError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.simulation.delay().await;
        if self.simulation.should_fail() {
            return Err(WelcomeNotificationError::unavailable(SIMULATED_OUTAGE_MESSAGE));
        }

        self.outbox.lock().await.push(record.email().to_owned());
        info!(
            username = record.username(),
            email = record.email(),
            "welcome email dispatched"
        );
        Ok(())
    }
}
