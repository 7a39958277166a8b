//! Sign-in form state
//!
//! Tracks the selected login method and the raw text of each input, and routes a
//! submission to the matching verifier call.

use log::info;

use super::outcome::SignInOutcome;
use crate::auth::{LoginMethod, Verifier};

/// Inputs of the sign-in screen.
///
/// Switching methods keeps whatever was typed into the other inputs.
#[derive(Debug, Default, Clone)]
pub struct SignInForm {
    method: LoginMethod,
    email: String,
    phone: String,
    password: String,
}

impl SignInForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(&self) -> LoginMethod {
        self.method
    }

    pub fn select_method(&mut self, method: LoginMethod) {
        self.method = method;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Whether the password input takes part in the current method
    pub fn shows_password(&self) -> bool {
        self.method.requires_password()
    }

    /// Submits the inputs for the current method only.
    pub fn submit(&self, verifier: &Verifier<'_>) -> SignInOutcome {
        let result = match self.method {
            LoginMethod::Email => verifier.verify_email(&self.email, &self.password),
            LoginMethod::Phone => verifier.verify_phone(&self.phone),
        };

        if let Ok(verification) = &result {
            info!(
                "{} signed in with {}",
                verification.display_name, verification.method
            );
        }

        SignInOutcome::new(self.method, result)
    }
}
