//! Email validation adapters.

mod regex_email_validator;

pub use regex_email_validator::{EMAIL_MAX_LENGTH, RegexEmailValidator};
