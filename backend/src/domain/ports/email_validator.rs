//! Driven port for email address validation.
//!
//! The sign-up handler only needs a yes/no answer; the format rules live in
//! whichever adapter backs this port.

use async_trait::async_trait;

/// Errors raised when an email validator cannot produce an answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailValidatorError {
    /// A backing service the validator relies on could not be reached.
    #[error("email validator unavailable: {message}")]
    Unavailable { message: String },
    /// The validator failed while checking the address.
    #[error("email validation failed: {message}")]
    Internal { message: String },
}

impl EmailValidatorError {
    /// Construct an [`EmailValidatorError::Unavailable`].
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Construct an [`EmailValidatorError::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Port answering whether a string is a syntactically valid email address.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailValidator: Send + Sync {
    /// Return `true` when `email` is a valid address.
    async fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError>;
}

/// Fixture validator that accepts every address.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEmailValidator;

#[async_trait]
impl EmailValidator for FixtureEmailValidator {
    async fn is_valid(&self, _email: &str) -> Result<bool, EmailValidatorError> {
        Ok(true)
    }
}
