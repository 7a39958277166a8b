//! Sign-in credential verification
//!
//! An immutable in-memory identity directory, keyed independently by email and by
//! phone, and a stateless verifier answering sign-in queries against it.

pub mod auth;
pub mod config;
pub mod error;
pub mod signin;
pub mod signup;
pub mod utils;

use std::path::Path;

pub use auth::{Directory, LoginMethod, Verification, Verifier};
pub use crate::config::{DirectoryConfig, IdentitySeed};
pub use error::{AuthError, DirectoryError, Field, SignInError, ValidationError};
pub use signin::{SignInForm, SignInOutcome};
pub use signup::SignUpForm;

/// Loads seed configuration and builds the directory.
///
/// With no path, `./config.toml` is used when present and the sample identity
/// otherwise.
pub fn load_directory(path: Option<&Path>) -> Result<Directory, SignInError> {
    let result = build_directory(path);
    if let Err(e) = &result {
        error::handlers::handle_error(e);
    }
    result
}

fn build_directory(path: Option<&Path>) -> Result<Directory, SignInError> {
    let config = match path {
        Some(path) => DirectoryConfig::load_from(path)?,
        None => DirectoryConfig::load()?,
    };
    Ok(config.build_directory()?)
}
