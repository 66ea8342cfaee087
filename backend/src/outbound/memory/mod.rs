//! In-process adapters backed by memory only.
//!
//! Suitable for local runs and tests; state is lost when the process exits.

mod in_memory_account_repository;

pub use in_memory_account_repository::InMemoryAccountRepository;
