//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the sign-up use-case and remain testable without I/O.

use std::sync::Arc;

use crate::domain::SignUpHandler;
use crate::domain::ports::{AddAccount, EmailValidator};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub sign_up: Arc<SignUpHandler>,
}

impl HttpState {
    /// Construct state around an existing handler.
    pub fn new(sign_up: SignUpHandler) -> Self {
        Self {
            sign_up: Arc::new(sign_up),
        }
    }

    /// Construct state from the sign-up collaborators.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use signup::domain::ports::{FixtureAddAccount, FixtureEmailValidator};
    /// use signup::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::from_ports(Arc::new(FixtureEmailValidator), Arc::new(FixtureAddAccount));
    /// let _handler = state.sign_up.clone();
    /// ```
    pub fn from_ports(
        email_validator: Arc<dyn EmailValidator>,
        add_account: Arc<dyn AddAccount>,
    ) -> Self {
        Self::new(SignUpHandler::new(email_validator, add_account))
    }
}
