//! Sign-up form state
//!
//! Holds the registration inputs and reports every rule they break at once, in
//! form order, so each field can show its own message.

use log::debug;

use crate::error::ValidationError;
use crate::utils::validation::{
    PasswordStrength, is_blank, is_valid_email, is_valid_phone, meets_min_password_length,
    password_strength,
};

/// Live state of the confirmation input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordMatch {
    /// Nothing typed into the confirmation yet
    Pending,
    Matches,
    Differs,
}

#[derive(Debug, Default, Clone)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn password_strength(&self) -> Option<PasswordStrength> {
        password_strength(&self.password)
    }

    pub fn password_match(&self) -> PasswordMatch {
        if self.confirm_password.is_empty() {
            PasswordMatch::Pending
        } else if self.password == self.confirm_password {
            PasswordMatch::Matches
        } else {
            PasswordMatch::Differs
        }
    }

    /// Checks every field; an empty list means the form can be submitted.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if is_blank(&self.first_name) {
            errors.push(ValidationError::MissingFirstName);
        }
        if is_blank(&self.last_name) {
            errors.push(ValidationError::MissingLastName);
        }
        if !is_valid_email(&self.email) {
            errors.push(ValidationError::InvalidEmail);
        }
        if !is_valid_phone(&self.phone) {
            errors.push(ValidationError::InvalidPhone);
        }
        if !meets_min_password_length(&self.password) {
            errors.push(ValidationError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            errors.push(ValidationError::PasswordMismatch);
        }
        if !self.terms_accepted {
            errors.push(ValidationError::TermsNotAccepted);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            debug!("Sign-up form rejected with {} field errors", errors.len());
            Err(errors)
        }
    }
}
