//! HTTP inbound adapter exposing the registration endpoint and health probes.

pub mod error;
pub mod health;
pub mod registrations;
pub mod state;

pub use error::ApiResult;
