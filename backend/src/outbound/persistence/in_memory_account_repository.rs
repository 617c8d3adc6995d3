//! In-memory implementation of [`AccountRepository`].
//!
//! Accounts are keyed by username; a second save for the same username is
//! rejected, which is where duplicate registrations are detected.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::RegistrationRecord;
use crate::domain::ports::{AccountRepository, AccountRepositoryError, StoredAccount};
use crate::outbound::GatewaySimulation;

const SIMULATED_OUTAGE_MESSAGE: &str = "Database connection failed.";

/// Account repository holding accounts in process memory.
///
/// # Examples
/// ```
/// use registration::domain::RegistrationRecord;
/// use registration::domain::ports::AccountRepository;
/// use registration::outbound::persistence::InMemoryAccountRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryAccountRepository::new();
/// let record = RegistrationRecord::new("john_doe", "john@example.com", "securepassword");
/// repo.save(&record).await.unwrap();
/// assert!(repo.find_by_username("john_doe").await.unwrap().is_some());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, StoredAccount>>,
    simulation: GatewaySimulation,
    save_calls: AtomicUsize,
}

impl InMemoryAccountRepository {
    /// Create an empty, healthy repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty repository that follows `simulation`.
    #[must_use]
    pub fn with_simulation(simulation: GatewaySimulation) -> Self {
        Self {
            simulation,
            ..Self::default()
        }
    }

    /// Number of times [`AccountRepository::save`] has been called.
    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Whether no account has been stored.
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn save(&self, record: &RegistrationRecord) -> Result<(), AccountRepositoryError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.simulation.delay().await;
        if self.simulation.should_fail() {
            return Err(AccountRepositoryError::connection(SIMULATED_OUTAGE_MESSAGE));
        }

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(record.username()) {
            return Err(AccountRepositoryError::duplicate_username(record.username()));
        }
        accounts.insert(record.username().to_owned(), StoredAccount::from(record));
        debug!(username = record.username(), total = accounts.len(), "account stored");
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<StoredAccount>, AccountRepositoryError> {
        Ok(self.accounts.read().await.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn record() -> RegistrationRecord {
        RegistrationRecord::new("john_doe", "john@example.com", "securepassword")
    }

    #[rstest]
    #[tokio::test]
    async fn saved_accounts_can_be_found(record: RegistrationRecord) {
        let repo = InMemoryAccountRepository::new();
        repo.save(&record).await.expect("save succeeds");

        let stored = repo
            .find_by_username("john_doe")
            .await
            .expect("lookup succeeds")
            .expect("account present");
        assert_eq!(stored.email, "john@example.com");
        assert_eq!(repo.save_calls(), 1);
        assert_eq!(repo.len().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_usernames_are_rejected(record: RegistrationRecord) {
        let repo = InMemoryAccountRepository::new();
        repo.save(&record).await.expect("first save succeeds");

        let err = repo.save(&record).await.expect_err("second save fails");
        assert_eq!(err, AccountRepositoryError::duplicate_username("john_doe"));
        assert_eq!(repo.len().await, 1);
        assert_eq!(repo.save_calls(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn simulated_outage_stores_nothing(record: RegistrationRecord) {
        let repo =
            InMemoryAccountRepository::with_simulation(GatewaySimulation::default().failing());

        let err = repo.save(&record).await.expect_err("outage fails the save");
        assert_eq!(err.code(), "connection");
        assert!(repo.is_empty().await);
        assert_eq!(repo.save_calls(), 1);
    }

    #[tokio::test]
    async fn unknown_usernames_are_absent() {
        let repo = InMemoryAccountRepository::new();
        let found = repo.find_by_username("nobody").await.expect("lookup succeeds");
        assert!(found.is_none());
    }
}
