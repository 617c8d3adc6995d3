//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `REGISTRATION_*` environment variables or a
//! configuration file; anything left unset falls back to the defaults below.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::GatewaySimulation;

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default bind port.
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration values for the registration server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REGISTRATION")]
pub struct RegistrationSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Artificial delay applied to each gateway call, in milliseconds.
    pub gateway_latency_ms: Option<u64>,
    /// Force every account save to fail.
    #[ortho_config(default = false)]
    pub fail_persistence: bool,
    /// Force every welcome email to fail.
    #[ortho_config(default = false)]
    pub fail_notification: bool,
}

impl RegistrationSettings {
    /// Return the configured host, falling back to the default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Artificial gateway latency; zero when unset.
    pub fn gateway_latency(&self) -> Duration {
        Duration::from_millis(self.gateway_latency_ms.unwrap_or_default())
    }

    /// Simulation settings for the persistence adapter.
    pub fn persistence_simulation(&self) -> GatewaySimulation {
        GatewaySimulation::default()
            .with_latency(self.gateway_latency())
            .with_failure(self.fail_persistence)
    }

    /// Simulation settings for the notification adapter.
    pub fn notification_simulation(&self) -> GatewaySimulation {
        GatewaySimulation::default()
            .with_latency(self.gateway_latency())
            .with_failure(self.fail_notification)
    }
}
