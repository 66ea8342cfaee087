//! Domain ports for the hexagonal boundary.
//!
//! The sign-up handler depends on these traits only; adapters under
//! `outbound` and fixtures here provide implementations.

mod add_account;
mod email_validator;

#[cfg(test)]
pub use add_account::MockAddAccount;
pub use add_account::{AddAccount, AddAccountError, FIXTURE_ACCOUNT_ID, FixtureAddAccount};
#[cfg(test)]
pub use email_validator::MockEmailValidator;
pub use email_validator::{EmailValidator, EmailValidatorError, FixtureEmailValidator};
