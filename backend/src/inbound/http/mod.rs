//! HTTP inbound adapter exposing the sign-up endpoint.

pub mod error;
pub mod sign_up;
pub mod state;

pub use error::json_config;
