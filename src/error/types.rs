//! Error types
//!
//! Defines domain-specific error types for verification, directory construction
//! and configuration loading.

use std::fmt;

/// Input field a caller left blank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Phone,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Email => write!(f, "email"),
            Field::Phone => write!(f, "phone number"),
            Field::Password => write!(f, "password"),
        }
    }
}

/// Verification errors
///
/// Every variant is a classified outcome returned to the caller, never a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    EmptyInput(Field),
    UserNotFound(String),
    InvalidPassword(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::EmptyInput(field) => write!(f, "Empty input: {}", field),
            AuthError::UserNotFound(id) => write!(f, "User not found: {}", id),
            AuthError::InvalidPassword(id) => write!(f, "Invalid password for user: {}", id),
        }
    }
}

impl std::error::Error for AuthError {}

/// Sign-up field rule violations, displayed as the form's inline messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingFirstName,
    MissingLastName,
    InvalidEmail,
    InvalidPhone,
    PasswordTooShort,
    PasswordMismatch,
    TermsNotAccepted,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFirstName => write!(f, "First name is required"),
            ValidationError::MissingLastName => write!(f, "Last name is required"),
            ValidationError::InvalidEmail => write!(f, "Invalid email address"),
            ValidationError::InvalidPhone => write!(f, "Phone must be 10 digits"),
            ValidationError::PasswordTooShort => write!(f, "Minimum 8 characters"),
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match"),
            ValidationError::TermsNotAccepted => {
                write!(f, "You must accept the terms and conditions")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while building a directory from seed records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    MissingIdentifier(String),
    MissingDisplayName,
    EmptyIdentifier(String),
    MissingSecret(String),
    DuplicateEmail(String),
    DuplicatePhone(String),
    InvalidPasswordHash(String),
    RuleViolation {
        owner: String,
        rule: ValidationError,
    },
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::MissingIdentifier(name) => {
                write!(f, "Record for {} has neither email nor phone", name)
            }
            DirectoryError::MissingDisplayName => write!(f, "Record has an empty display name"),
            DirectoryError::EmptyIdentifier(name) => {
                write!(f, "Record for {} has a blank identifier", name)
            }
            DirectoryError::MissingSecret(email) => {
                write!(f, "Email record {} has no password", email)
            }
            DirectoryError::DuplicateEmail(email) => write!(f, "Duplicate email: {}", email),
            DirectoryError::DuplicatePhone(phone) => write!(f, "Duplicate phone: {}", phone),
            DirectoryError::InvalidPasswordHash(email) => {
                write!(f, "Unparseable password hash for: {}", email)
            }
            DirectoryError::RuleViolation { owner, rule } => {
                write!(f, "Record for {} breaks a sign-up rule: {}", owner, rule)
            }
        }
    }
}

impl std::error::Error for DirectoryError {}

/// Error returned when loading configuration or building a directory
#[derive(Debug)]
pub enum SignInError {
    Directory(DirectoryError),
    Config(config::ConfigError),
}

impl fmt::Display for SignInError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignInError::Directory(e) => write!(f, "Directory error: {}", e),
            SignInError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for SignInError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SignInError::Directory(e) => Some(e),
            SignInError::Config(e) => Some(e),
        }
    }
}

impl From<DirectoryError> for SignInError {
    fn from(error: DirectoryError) -> Self {
        SignInError::Directory(error)
    }
}

impl From<config::ConfigError> for SignInError {
    fn from(error: config::ConfigError) -> Self {
        SignInError::Config(error)
    }
}
