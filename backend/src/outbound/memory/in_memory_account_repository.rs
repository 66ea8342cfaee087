//! Account creation adapter storing accounts in process memory.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{AddAccount, AddAccountError};
use crate::domain::{Account, AddAccountModel};

/// [`AddAccount`] adapter keeping accounts in a map keyed by email.
///
/// Each stored account receives a random UUID. Registering an email twice
/// fails with [`AddAccountError::Duplicate`].
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the account registered under `email`.
    pub async fn find_by_email(&self, email: &str) -> Option<Account> {
        self.accounts.read().await.get(email).cloned()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Whether no account has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AddAccount for InMemoryAccountRepository {
    async fn add(&self, account: AddAccountModel) -> Result<Account, AddAccountError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account.email()) {
            return Err(AddAccountError::duplicate(account.email()));
        }

        let stored = Account::from_model(Uuid::new_v4(), &account);
        accounts.insert(account.email().to_owned(), stored.clone());
        debug!(account_id = %stored.id(), "account stored");
        Ok(stored)
    }
}
