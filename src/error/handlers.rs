//! Error handlers
//!
//! Logs errors and turns verification failures into the sentences shown to the user.

use crate::auth::LoginMethod;
use crate::error::types::{AuthError, Field, SignInError};
use log::error;

/// Handle a crate-level error
pub fn handle_error(err: &SignInError) {
    error!("Sign-in error: {}", err);
}

/// Convert a verification failure to the message shown on the sign-in screen
pub fn error_to_message(err: &AuthError, method: LoginMethod) -> &'static str {
    match (err, method) {
        (AuthError::EmptyInput(Field::Email), _) => "Please enter your email.",
        (AuthError::EmptyInput(Field::Password), _) => "Please enter your password.",
        (AuthError::EmptyInput(Field::Phone), _) => "Please enter your phone number.",
        (AuthError::InvalidPassword(_), _) => "Invalid password.",
        (AuthError::UserNotFound(_), LoginMethod::Email) => "User not found.",
        (AuthError::UserNotFound(_), LoginMethod::Phone) => "Phone number not found.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_messages() {
        let method = LoginMethod::Email;
        assert_eq!(
            error_to_message(&AuthError::EmptyInput(Field::Email), method),
            "Please enter your email."
        );
        assert_eq!(
            error_to_message(&AuthError::EmptyInput(Field::Password), method),
            "Please enter your password."
        );
        assert_eq!(
            error_to_message(&AuthError::EmptyInput(Field::Phone), LoginMethod::Phone),
            "Please enter your phone number."
        );
    }

    #[test]
    fn test_lookup_failure_messages() {
        let missing = AuthError::UserNotFound("nobody".into());
        assert_eq!(error_to_message(&missing, LoginMethod::Email), "User not found.");
        assert_eq!(
            error_to_message(&missing, LoginMethod::Phone),
            "Phone number not found."
        );
        assert_eq!(
            error_to_message(
                &AuthError::InvalidPassword("user@example.com".into()),
                LoginMethod::Email
            ),
            "Invalid password."
        );
    }
}
