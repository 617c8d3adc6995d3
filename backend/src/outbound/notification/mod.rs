//! Notification adapters for the welcome notifier port.

mod tracing_welcome_notifier;

pub use tracing_welcome_notifier::TracingWelcomeNotifier;
