//! Account data model.
//!
//! [`AddAccountModel`] is the validated input handed to the account creation
//! port; [`Account`] is the record that port hands back.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use zeroize::Zeroizing;

/// Registration data accepted by [`crate::domain::ports::AddAccount`].
///
/// Only the fields that are persisted travel this far: the password
/// confirmation stays behind in the sign-up request.
///
/// # Examples
/// ```
/// use signup::domain::AddAccountModel;
///
/// let model = AddAccountModel::new("Ada", "ada@example.com", "hunter22");
/// assert_eq!(model.email(), "ada@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAccountModel {
    name: String,
    email: String,
    password: Zeroizing<String>,
}

impl AddAccountModel {
    /// Bundle already validated registration fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Account holder name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email address the account is registered under.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password supplied at registration.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Account record produced by the account creation port.
///
/// The sign-up handler treats this as an opaque payload and returns it to
/// the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: Uuid,
    #[schema(example = "Ada Lovelace")]
    name: String,
    #[schema(example = "ada@example.com")]
    email: String,
    password: String,
}

impl Account {
    /// Construct an account record.
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Build a record for freshly registered data under the given id.
    pub fn from_model(id: Uuid, model: &AddAccountModel) -> Self {
        Self::new(id, model.name(), model.email(), model.password())
    }

    /// Stable account identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Account holder name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Registered email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Stored password value.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
