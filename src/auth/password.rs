//! Salted password hashing using Argon2id.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a password into a PHC string.
///
/// # Errors
///
/// Returns the underlying `password_hash` error if hashing fails.
pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Returns true when `hash` is a PHC string this module can verify against.
pub fn is_valid_hash(hash: &str) -> bool {
    PasswordHash::new(hash).is_ok()
}

/// Verify a password against its hash.
#[must_use]
pub fn verify(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash("password123").unwrap();

        assert!(is_valid_hash(&hash));
        assert!(verify("password123", &hash));
        assert!(!verify("Password123", &hash));
    }

    #[test]
    fn test_salts_differ() {
        let first = hash("same").unwrap();
        let second = hash("same").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        assert!(!is_valid_hash("not-a-phc-string"));
        assert!(!verify("anything", "not-a-phc-string"));
    }
}
