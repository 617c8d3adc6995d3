//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! The adapters here run in-process and stand in for a real datastore and
//! mail transport:
//!
//! - **persistence**: in-memory account repository
//! - **notification**: welcome notifier that records and logs deliveries
//!
//! Both accept a [`GatewaySimulation`] so latency and outages can be rehearsed
//! without external services. Adapters are thin translators and contain no
//! registration logic.

pub mod notification;
pub mod persistence;
mod simulation;

pub use simulation::GatewaySimulation;
