//! Authentication result types
//!
//! Defines the login method and the value returned by a successful verification.

use std::fmt;

/// Which identifier the caller authenticates with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginMethod {
    #[default]
    Email,
    Phone,
}

impl LoginMethod {
    /// Email sign-in presents a password; phone sign-in does not.
    pub fn requires_password(self) -> bool {
        matches!(self, LoginMethod::Email)
    }
}

impl fmt::Display for LoginMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginMethod::Email => write!(f, "email"),
            LoginMethod::Phone => write!(f, "phone"),
        }
    }
}

/// Result of a successful verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub display_name: String,
    /// Identifier as matched, after trimming
    pub identifier: String,
    pub method: LoginMethod,
}
