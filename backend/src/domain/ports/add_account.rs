//! Driven port for account creation.
//!
//! Adapters decide how (and whether) the account is persisted. The sign-up
//! handler only forwards the returned record.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Account, AddAccountModel};

/// Errors raised by account creation adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddAccountError {
    /// Backing store connection could not be established.
    #[error("account store connection failed: {message}")]
    Connection { message: String },
    /// An account already exists for this email address.
    #[error("account already exists for {email}")]
    Duplicate { email: String },
}

impl AddAccountError {
    /// Construct an [`AddAccountError::Connection`].
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Construct an [`AddAccountError::Duplicate`].
    pub fn duplicate(email: impl Into<String>) -> Self {
        Self::Duplicate {
            email: email.into(),
        }
    }
}

/// Port creating an account from validated registration data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Create and return the account record.
    async fn add(&self, account: AddAccountModel) -> Result<Account, AddAccountError>;
}

/// Identifier assigned to every account produced by [`FixtureAddAccount`].
pub const FIXTURE_ACCOUNT_ID: Uuid = Uuid::from_u128(0x123e4567_e89b_12d3_a456_426614174000);

/// Fixture account creator that echoes the data back under a fixed id.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAddAccount;

#[async_trait]
impl AddAccount for FixtureAddAccount {
    async fn add(&self, account: AddAccountModel) -> Result<Account, AddAccountError> {
        Ok(Account::from_model(FIXTURE_ACCOUNT_ID, &account))
    }
}
