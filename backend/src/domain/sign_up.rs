//! Sign-up request and response envelopes plus the failure taxonomy.
//!
//! The request body is structurally typed: every field is optional so the
//! handler, not the deserialiser, decides which missing field to report.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Account, Error};

/// Message returned for every collaborator failure.
pub const SERVER_FAILURE_MESSAGE: &str = "Internal server error";

/// Raw sign-up submission body.
///
/// Example JSON:
/// `{"name":"Ada","email":"ada@example.com","password":"pw","passwordConfirmation":"pw"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

/// Request envelope handed to the sign-up handler by a transport adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpRequest {
    pub body: SignUpBody,
}

impl SignUpRequest {
    /// Wrap a submission body.
    pub fn new(body: SignUpBody) -> Self {
        Self { body }
    }
}

/// Sign-up fields named in client errors, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignUpField {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

impl SignUpField {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::PasswordConfirmation => "passwordConfirmation",
        }
    }

    /// Read this field from a submission body.
    pub fn value(self, body: &SignUpBody) -> Option<&str> {
        match self {
            Self::Name => body.name.as_deref(),
            Self::Email => body.email.as_deref(),
            Self::Password => body.password.as_deref(),
            Self::PasswordConfirmation => body.password_confirmation.as_deref(),
        }
    }
}

impl fmt::Display for SignUpField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ways a sign-up can fail.
///
/// Client errors name the offending field; the server failure deliberately
/// carries nothing from the collaborator that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignUpError {
    /// A required field was absent or empty.
    #[error("Missing param: {0}")]
    MissingParameter(SignUpField),
    /// A field was present but failed a semantic check.
    #[error("Invalid param: {0}")]
    InvalidParameter(SignUpField),
    /// A collaborator failed unexpectedly.
    #[error("Internal server error")]
    ServerFailure,
}

impl From<SignUpError> for Error {
    fn from(value: SignUpError) -> Self {
        match value {
            SignUpError::MissingParameter(field) => Self::invalid_request(value.to_string())
                .with_details(json!({ "field": field.as_str(), "code": "missing_param" })),
            SignUpError::InvalidParameter(field) => Self::invalid_request(value.to_string())
                .with_details(json!({ "field": field.as_str(), "code": "invalid_param" })),
            SignUpError::ServerFailure => Self::internal(SERVER_FAILURE_MESSAGE),
        }
    }
}

/// Body of a sign-up response: the created account or an error payload.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SignUpResponseBody {
    /// Created account (2xx).
    Account(Account),
    /// Error payload (4xx/5xx).
    Error(Error),
}

/// Response envelope produced exactly once per sign-up invocation.
///
/// # Examples
/// ```
/// use signup::domain::{SignUpError, SignUpField, SignUpResponse};
///
/// let response = SignUpResponse::from(SignUpError::MissingParameter(SignUpField::Email));
/// assert_eq!(response.status_code(), 400);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    status_code: u16,
    body: SignUpResponseBody,
}

impl SignUpResponse {
    /// Successful sign-up carrying the created account verbatim.
    pub fn ok(account: Account) -> Self {
        Self {
            status_code: 200,
            body: SignUpResponseBody::Account(account),
        }
    }

    /// Numeric status code.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Response body.
    pub fn body(&self) -> &SignUpResponseBody {
        &self.body
    }

    /// Split into status code and body.
    pub fn into_parts(self) -> (u16, SignUpResponseBody) {
        (self.status_code, self.body)
    }
}

impl From<SignUpError> for SignUpResponse {
    fn from(value: SignUpError) -> Self {
        let error = Error::from(value);
        Self {
            status_code: error.code().status_code(),
            body: SignUpResponseBody::Error(error),
        }
    }
}
