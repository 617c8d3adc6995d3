//! Latency and fault injection shared by the in-process gateway adapters.

use std::time::Duration;

/// How an in-process gateway should misbehave.
///
/// The default is an instant, always-successful gateway.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use registration::outbound::GatewaySimulation;
///
/// let sim = GatewaySimulation::default()
///     .with_latency(Duration::from_millis(5))
///     .failing();
/// assert!(sim.should_fail());
/// assert_eq!(sim.latency(), Duration::from_millis(5));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GatewaySimulation {
    latency: Duration,
    fail: bool,
}

impl GatewaySimulation {
    /// Delay every call by `latency` before answering.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Fail every call.
    #[must_use]
    pub const fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Set whether calls fail.
    #[must_use]
    pub const fn with_failure(mut self, fail: bool) -> Self {
        self.fail = fail;
        self
    }

    /// Configured delay.
    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }

    /// Whether calls are forced to fail.
    #[must_use]
    pub const fn should_fail(&self) -> bool {
        self.fail
    }

    /// Wait out the configured latency.
    pub async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}
