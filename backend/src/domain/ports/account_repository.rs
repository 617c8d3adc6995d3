//! Port abstraction for account persistence adapters and their errors.
//!
//! The registration orchestrator only observes whether [`AccountRepository::save`]
//! succeeded; the error detail is for adapter logs. Uniqueness checks and
//! storage concurrency control belong to the adapter.

use async_trait::async_trait;

use crate::domain::RegistrationRecord;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by account repository adapters.
    pub enum AccountRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "account repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "account repository query failed: {message}",
        /// An account with this username already exists.
        DuplicateUsername { username: String } => "username already registered: {username}",
    }
}

/// Account data kept by the persistence gateway.
///
/// Passwords are not part of the stored shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAccount {
    /// Registered account name.
    pub username: String,
    /// Registered address.
    pub email: String,
}

impl From<&RegistrationRecord> for StoredAccount {
    fn from(record: &RegistrationRecord) -> Self {
        Self {
            username: record.username().to_owned(),
            email: record.email().to_owned(),
        }
    }
}

/// Persistence gateway for registered accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Store a newly registered account.
    async fn save(&self, record: &RegistrationRecord) -> Result<(), AccountRepositoryError>;

    /// Fetch a stored account by username.
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<StoredAccount>, AccountRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
///
/// Accepts every save and reports no stored accounts.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccountRepository;

#[async_trait]
impl AccountRepository for FixtureAccountRepository {
    async fn save(&self, _record: &RegistrationRecord) -> Result<(), AccountRepositoryError> {
        Ok(())
    }

    async fn find_by_username(
        &self,
        _username: &str,
    ) -> Result<Option<StoredAccount>, AccountRepositoryError> {
        Ok(None)
    }
}
