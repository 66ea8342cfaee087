//! Sign-up use-case: validate a submission, create the account, shape the
//! response.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. `name`, `email`, `password`, `passwordConfirmation` must be present
//!    and non-empty;
//! 2. `password` must equal `passwordConfirmation`;
//! 3. the email validator must accept `email`.
//!
//! Only then is the account creation port called. Every outcome becomes a
//! [`SignUpResponse`]; nothing raised by a collaborator escapes `handle`.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use tracing::error;

use crate::domain::ports::{AddAccount, EmailValidator};
use crate::domain::{
    Account, AddAccountModel, SignUpBody, SignUpError, SignUpField, SignUpRequest, SignUpResponse,
};

/// Stateless sign-up handler holding its two collaborators.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use signup::domain::ports::{FixtureAddAccount, FixtureEmailValidator};
/// use signup::domain::{SignUpBody, SignUpHandler, SignUpRequest};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let handler = SignUpHandler::new(Arc::new(FixtureEmailValidator), Arc::new(FixtureAddAccount));
/// let response = handler
///     .handle(SignUpRequest::new(SignUpBody {
///         name: Some("Ada".into()),
///         email: Some("ada@example.com".into()),
///         password: Some("pw".into()),
///         password_confirmation: Some("pw".into()),
///     }))
///     .await;
/// assert_eq!(response.status_code(), 200);
/// # });
/// ```
#[derive(Clone)]
pub struct SignUpHandler {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpHandler {
    /// Create a handler over the given collaborators.
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        add_account: Arc<dyn AddAccount>,
    ) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    /// Handle one sign-up request and produce its single response.
    pub async fn handle(&self, request: SignUpRequest) -> SignUpResponse {
        match self.sign_up(&request.body).await {
            Ok(account) => SignUpResponse::ok(account),
            Err(err) => SignUpResponse::from(err),
        }
    }

    async fn sign_up(&self, body: &SignUpBody) -> Result<Account, SignUpError> {
        let model = Self::validate_shape(body)?;

        let email_validator = Arc::clone(&self.email_validator);
        let email = model.email();
        let valid = guard_collaborator("email_validator", async move {
            email_validator.is_valid(email).await
        })
        .await?;
        if !valid {
            return Err(SignUpError::InvalidParameter(SignUpField::Email));
        }

        let add_account = Arc::clone(&self.add_account);
        guard_collaborator("add_account", async move { add_account.add(model).await }).await
    }

    /// Presence checks followed by the confirmation check.
    fn validate_shape(body: &SignUpBody) -> Result<AddAccountModel, SignUpError> {
        let name = require(body, SignUpField::Name)?;
        let email = require(body, SignUpField::Email)?;
        let password = require(body, SignUpField::Password)?;
        let confirmation = require(body, SignUpField::PasswordConfirmation)?;

        if password != confirmation {
            return Err(SignUpError::InvalidParameter(
                SignUpField::PasswordConfirmation,
            ));
        }

        Ok(AddAccountModel::new(name, email, password))
    }
}

fn require(body: &SignUpBody, field: SignUpField) -> Result<&str, SignUpError> {
    field
        .value(body)
        .filter(|value| !value.is_empty())
        .ok_or(SignUpError::MissingParameter(field))
}

/// Await a collaborator call, folding errors and panics into
/// [`SignUpError::ServerFailure`].
///
/// The call must be made inside `call` so a panic raised while starting it
/// is caught the same way as one raised while it runs.
async fn guard_collaborator<T, E, Fut>(
    collaborator: &'static str,
    call: Fut,
) -> Result<T, SignUpError>
where
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    match AssertUnwindSafe(call).catch_unwind().await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            error!(collaborator, error = %err, "sign-up collaborator failed");
            Err(SignUpError::ServerFailure)
        }
        Err(payload) => {
            error!(
                collaborator,
                panic = panic_message(payload.as_ref()),
                "sign-up collaborator panicked"
            );
            Err(SignUpError::ServerFailure)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

#[cfg(test)]
mod tests;
