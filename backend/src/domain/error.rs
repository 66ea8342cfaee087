//! Error payload placed in sign-up response bodies.
//!
//! Transport agnostic: inbound adapters pick the protocol status from
//! [`ErrorCode`] and serialise the payload as is.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Failure category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The caller sent a missing or invalid parameter.
    InvalidRequest,
    /// A collaborator failed; detail is withheld.
    InternalError,
}

impl ErrorCode {
    /// Numeric status code carried by a response envelope for this category.
    pub fn status_code(self) -> u16 {
        match self {
            Self::InvalidRequest => 400,
            Self::InternalError => 500,
        }
    }
}

/// Error payload: a code, a message and optional structured details.
///
/// # Examples
/// ```
/// use signup::domain::{Error, ErrorCode};
/// use serde_json::json;
///
/// let err = Error::invalid_request("Invalid param: email")
///     .with_details(json!({ "field": "email", "code": "invalid_param" }));
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert!(err.details().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    #[schema(example = "invalid_request")]
    code: ErrorCode,
    #[schema(example = "Missing param: email")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create an error without details.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// 400-class error for a caller mistake.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// 500-class error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Attach structured details.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Failure category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structured details, when attached.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}

// Required by actix's `ResponseError`.
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
