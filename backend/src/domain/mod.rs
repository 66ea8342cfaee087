//! Domain primitives, ports, and the sign-up use-case.
//!
//! Purpose: keep registration rules independent of transport and storage.
//! Inbound adapters build a [`SignUpRequest`], call [`SignUpHandler`], and
//! translate the returned [`SignUpResponse`]; outbound adapters implement the
//! traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode — API error payload and its stable code.
//! - Account / AddAccountModel — account record and registration input.
//! - SignUpHandler — validation and dispatch for one sign-up request.

pub mod account;
pub mod error;
pub mod ports;
pub mod sign_up;
pub mod sign_up_handler;

pub use self::account::{Account, AddAccountModel};
pub use self::error::{Error, ErrorCode};
pub use self::sign_up::{
    SERVER_FAILURE_MESSAGE, SignUpBody, SignUpError, SignUpField, SignUpRequest, SignUpResponse,
    SignUpResponseBody,
};
pub use self::sign_up_handler::SignUpHandler;
