//! Sign-up form validation
//!
//! Field rules of the registration form. Accounts are not created here; the
//! directory stays read-only.

pub mod form;

pub use form::{PasswordMatch, SignUpForm};
