//! Sign-in outcome
//!
//! Wraps a verification result with the method it was made under, so the caller
//! can show the same dialog text the sign-in screen shows.

use crate::auth::{LoginMethod, Verification};
use crate::error::AuthError;
use crate::error::handlers::error_to_message;

/// How a message should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Information,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInOutcome {
    method: LoginMethod,
    result: Result<Verification, AuthError>,
}

impl SignInOutcome {
    pub fn new(method: LoginMethod, result: Result<Verification, AuthError>) -> Self {
        Self { method, result }
    }

    pub fn method(&self) -> LoginMethod {
        self.method
    }

    pub fn result(&self) -> &Result<Verification, AuthError> {
        &self.result
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Missing input is a warning; a failed lookup is critical.
    pub fn severity(&self) -> Severity {
        match &self.result {
            Ok(_) => Severity::Information,
            Err(AuthError::EmptyInput(_)) => Severity::Warning,
            Err(_) => Severity::Critical,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.is_success() { "Success" } else { "Error" }
    }

    pub fn message(&self) -> String {
        match &self.result {
            Ok(verification) => format!(
                "Welcome back, {}!\n\nLogged in with {}: {}",
                verification.display_name, verification.method, verification.identifier
            ),
            Err(err) => error_to_message(err, self.method).to_string(),
        }
    }
}
