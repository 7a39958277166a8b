//! Authentication validator
//!
//! Answers email and phone verification queries against a borrowed directory.
//! Blank input is rejected before the directory is consulted.

use log::{debug, warn};

use super::credentials::Directory;
use super::results::{LoginMethod, Verification};
use crate::error::{AuthError, Field};
use crate::utils::validation::is_blank;

/// Stateless verifier over a directory the caller owns.
#[derive(Debug, Clone, Copy)]
pub struct Verifier<'a> {
    directory: &'a Directory,
}

impl<'a> Verifier<'a> {
    pub fn new(directory: &'a Directory) -> Self {
        Self { directory }
    }

    /// Verifies an email and password pair.
    ///
    /// The email is trimmed before lookup. The password is compared exactly as given.
    pub fn verify_email(&self, email: &str, password: &str) -> Result<Verification, AuthError> {
        if is_blank(email) {
            return Err(AuthError::EmptyInput(Field::Email));
        }
        if is_blank(password) {
            return Err(AuthError::EmptyInput(Field::Password));
        }

        let email = email.trim();
        let Some(entry) = self.directory.find_by_email(email) else {
            warn!("Email sign-in rejected: unknown user {}", email);
            return Err(AuthError::UserNotFound(email.to_string()));
        };

        if !entry.secret.matches(password) {
            warn!("Email sign-in rejected: wrong password for {}", email);
            return Err(AuthError::InvalidPassword(email.to_string()));
        }

        debug!("Email sign-in accepted for {}", email);
        Ok(Verification {
            display_name: entry.display_name.clone(),
            identifier: email.to_string(),
            method: LoginMethod::Email,
        })
    }

    /// Verifies a phone number. No secret is checked in phone mode.
    pub fn verify_phone(&self, phone: &str) -> Result<Verification, AuthError> {
        if is_blank(phone) {
            return Err(AuthError::EmptyInput(Field::Phone));
        }

        let phone = phone.trim();
        match self.directory.find_by_phone(phone) {
            Some(entry) => {
                debug!("Phone sign-in accepted for {}", phone);
                Ok(Verification {
                    display_name: entry.display_name.clone(),
                    identifier: phone.to_string(),
                    method: LoginMethod::Phone,
                })
            }
            None => {
                warn!("Phone sign-in rejected: unknown number {}", phone);
                Err(AuthError::UserNotFound(phone.to_string()))
            }
        }
    }
}
