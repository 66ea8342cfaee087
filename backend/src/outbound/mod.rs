//! Outbound adapters implementing domain ports.
//!
//! - **email**: pattern-based email address validation
//! - **memory**: process-local account storage
//!
//! Adapters are thin translators between domain types and their backing
//! mechanism. They contain no sign-up rules.

pub mod email;
pub mod memory;
