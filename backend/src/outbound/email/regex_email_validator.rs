//! Email validator backed by a regular expression.

use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;

use crate::domain::ports::{EmailValidator, EmailValidatorError};

/// Longest address accepted, per the SMTP path limit.
pub const EMAIL_MAX_LENGTH: usize = 254;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Local part of atext characters, then dot-separated DNS labels ending
        // in an alphabetic TLD.
        let pattern = concat!(
            r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+",
            r"@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?",
            r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*",
            r"\.[A-Za-z]{2,}$",
        );
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// [`EmailValidator`] checking addresses against a fixed pattern.
///
/// # Examples
/// ```
/// use signup::domain::ports::EmailValidator;
/// use signup::outbound::email::RegexEmailValidator;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let validator = RegexEmailValidator;
/// assert!(validator.is_valid("ada@example.com").await.unwrap());
/// assert!(!validator.is_valid("ada.example.com").await.unwrap());
/// # });
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexEmailValidator;

impl RegexEmailValidator {
    /// Check `email` synchronously.
    pub fn matches(email: &str) -> bool {
        email.len() <= EMAIL_MAX_LENGTH && email_regex().is_match(email)
    }
}

#[async_trait]
impl EmailValidator for RegexEmailValidator {
    async fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError> {
        Ok(Self::matches(email))
    }
}
