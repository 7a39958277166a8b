//! Sign-in form controller
//!
//! Method selection and submission routing for the sign-in screen, without any
//! presentation concerns.

pub mod form;
pub mod outcome;

pub use form::SignInForm;
pub use outcome::{Severity, SignInOutcome};
