//! Account sign-up library.
//!
//! The [`domain`] module holds the sign-up handler and the ports it talks
//! to; [`inbound`] and [`outbound`] hold the adapters around it.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
