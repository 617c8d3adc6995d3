//! Persistence adapters for the account repository port.

mod in_memory_account_repository;

pub use in_memory_account_repository::InMemoryAccountRepository;
