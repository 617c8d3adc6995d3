//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_registration;
mod account_repository;
mod welcome_notifier;

#[cfg(test)]
pub use account_registration::MockAccountRegistration;
pub use account_registration::AccountRegistration;
#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{
    AccountRepository, AccountRepositoryError, FixtureAccountRepository, StoredAccount,
};
#[cfg(test)]
pub use welcome_notifier::MockWelcomeNotifier;
pub use welcome_notifier::{FixtureWelcomeNotifier, WelcomeNotificationError, WelcomeNotifier};
