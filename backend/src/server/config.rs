//! HTTP server configuration object and helpers.

use std::net::{SocketAddr, ToSocketAddrs};

use registration::config::RegistrationSettings;
use registration::outbound::GatewaySimulation;

/// Resolved configuration for creating the HTTP server.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) persistence: GatewaySimulation,
    pub(crate) notification: GatewaySimulation,
}

impl ServerConfig {
    /// Construct a configuration with healthy, instant gateways.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            persistence: GatewaySimulation::default(),
            notification: GatewaySimulation::default(),
        }
    }

    /// Resolve loaded settings into a bindable configuration.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the host and port do not resolve.
    pub fn from_settings(settings: &RegistrationSettings) -> std::io::Result<Self> {
        let host = settings.host();
        let port = settings.port();
        let bind_addr = (host, port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| std::io::Error::other(format!("no address for {host}:{port}")))?;
        Ok(Self::new(bind_addr)
            .with_persistence(settings.persistence_simulation())
            .with_notification(settings.notification_simulation()))
    }

    /// Simulation applied to the persistence adapter.
    #[must_use]
    pub fn with_persistence(mut self, simulation: GatewaySimulation) -> Self {
        self.persistence = simulation;
        self
    }

    /// Simulation applied to the notification adapter.
    #[must_use]
    pub fn with_notification(mut self, simulation: GatewaySimulation) -> Self {
        self.notification = simulation;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
