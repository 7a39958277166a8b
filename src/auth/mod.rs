//! Authentication system
//!
//! Handles the identity directory and credential verification.

pub mod credentials;
pub mod password;
pub mod results;
pub mod validator;

pub use credentials::{Directory, EmailEntry, PhoneEntry, SeedRules, StoredSecret};
pub use results::{LoginMethod, Verification};
pub use validator::Verifier;
