//! Credential storage
//!
//! Holds the identity directory: two independently keyed tables, one by email and
//! one by phone, built once from seed records and read-only afterwards.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::{info, warn};

use super::password;
use crate::config::IdentitySeed;
use crate::error::{DirectoryError, ValidationError};
use crate::utils::validation::{is_valid_email, is_valid_phone, meets_min_password_length};

/// A stored password, either as given in the seed or as an Argon2 PHC string.
#[derive(Clone)]
pub enum StoredSecret {
    Plaintext(String),
    Hashed(String),
}

impl StoredSecret {
    /// Compares a presented password, byte-exact for plaintext secrets.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            StoredSecret::Plaintext(stored) => stored == candidate,
            StoredSecret::Hashed(phc) => password::verify(candidate, phc),
        }
    }

    pub fn is_plaintext(&self) -> bool {
        matches!(self, StoredSecret::Plaintext(_))
    }
}

impl std::fmt::Debug for StoredSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoredSecret::Plaintext(_) => write!(f, "Plaintext(..)"),
            StoredSecret::Hashed(_) => write!(f, "Hashed(..)"),
        }
    }
}

/// Entry of the email table
#[derive(Debug, Clone)]
pub struct EmailEntry {
    pub display_name: String,
    pub secret: StoredSecret,
    pub phone: Option<String>,
}

/// Entry of the phone table
#[derive(Debug, Clone)]
pub struct PhoneEntry {
    pub display_name: String,
    pub email: Option<String>,
}

/// In-memory set of known identities.
///
/// The email and phone tables are keyed and queried independently; nothing checks
/// that two entries sharing a display name describe the same person.
#[derive(Debug, Default, Clone)]
pub struct Directory {
    by_email: HashMap<String, EmailEntry>,
    by_phone: HashMap<String, PhoneEntry>,
}

impl Directory {
    /// Builds a directory from seed records, rejecting malformed or duplicate entries.
    pub fn from_seeds(seeds: &[IdentitySeed]) -> Result<Self, DirectoryError> {
        Self::from_seeds_with(seeds, SeedRules::Structural)
    }

    /// Like `from_seeds`, additionally applying `rules` to every record.
    pub fn from_seeds_with(seeds: &[IdentitySeed], rules: SeedRules) -> Result<Self, DirectoryError> {
        let mut directory = Directory::default();

        for seed in seeds {
            directory.insert_seed(seed, rules)?;
        }

        info!(
            "Directory ready: {} email identities, {} phone identities",
            directory.by_email.len(),
            directory.by_phone.len()
        );
        if directory.uses_plaintext_secrets() {
            warn!("Directory holds plaintext passwords; prefer password_hash in seeds");
        }

        Ok(directory)
    }

    /// The built-in sample directory with a single identity.
    pub fn sample() -> Result<Self, DirectoryError> {
        Self::from_seeds(&[IdentitySeed::sample()])
    }

    fn insert_seed(&mut self, seed: &IdentitySeed, rules: SeedRules) -> Result<(), DirectoryError> {
        let display_name = seed.display_name.trim();
        if display_name.is_empty() {
            return Err(DirectoryError::MissingDisplayName);
        }

        let email = normalize_key(seed.email.as_deref(), display_name)?;
        let phone = normalize_key(seed.phone.as_deref(), display_name)?;
        if email.is_none() && phone.is_none() {
            return Err(DirectoryError::MissingIdentifier(display_name.to_string()));
        }
        if rules == SeedRules::SignUp {
            check_signup_rules(display_name, email.as_deref(), phone.as_deref(), seed)?;
        }

        if let Some(email) = &email {
            let secret = match (&seed.password_hash, &seed.password) {
                (Some(phc), _) if password::is_valid_hash(phc) => StoredSecret::Hashed(phc.clone()),
                (Some(_), _) => return Err(DirectoryError::InvalidPasswordHash(email.clone())),
                (None, Some(plain)) if !plain.trim().is_empty() => StoredSecret::Plaintext(plain.clone()),
                (None, _) => return Err(DirectoryError::MissingSecret(email.clone())),
            };

            match self.by_email.entry(email.clone()) {
                Entry::Occupied(_) => return Err(DirectoryError::DuplicateEmail(email.clone())),
                Entry::Vacant(slot) => {
                    slot.insert(EmailEntry {
                        display_name: display_name.to_string(),
                        secret,
                        phone: phone.clone(),
                    });
                }
            }
        }

        if let Some(phone) = phone {
            match self.by_phone.entry(phone.clone()) {
                Entry::Occupied(_) => return Err(DirectoryError::DuplicatePhone(phone)),
                Entry::Vacant(slot) => {
                    slot.insert(PhoneEntry {
                        display_name: display_name.to_string(),
                        email,
                    });
                }
            }
        }

        Ok(())
    }

    /// Looks up an exact email key.
    pub fn find_by_email(&self, email: &str) -> Option<&EmailEntry> {
        self.by_email.get(email)
    }

    /// Looks up an exact phone key.
    pub fn find_by_phone(&self, phone: &str) -> Option<&PhoneEntry> {
        self.by_phone.get(phone)
    }

    pub fn email_count(&self) -> usize {
        self.by_email.len()
    }

    pub fn phone_count(&self) -> usize {
        self.by_phone.len()
    }

    /// Returns true if any email entry stores its password unhashed.
    pub fn uses_plaintext_secrets(&self) -> bool {
        self.by_email.values().any(|entry| entry.secret.is_plaintext())
    }
}

/// Checks applied to each seed record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedRules {
    /// Non-empty names, a secret for email records, unique keys
    #[default]
    Structural,
    /// Structural checks plus the sign-up form's field rules
    SignUp,
}

fn check_signup_rules(
    owner: &str,
    email: Option<&str>,
    phone: Option<&str>,
    seed: &IdentitySeed,
) -> Result<(), DirectoryError> {
    let violation = |rule| DirectoryError::RuleViolation {
        owner: owner.to_string(),
        rule,
    };

    if email.is_some_and(|email| !is_valid_email(email)) {
        return Err(violation(ValidationError::InvalidEmail));
    }
    if phone.is_some_and(|phone| !is_valid_phone(phone)) {
        return Err(violation(ValidationError::InvalidPhone));
    }
    // Hashed secrets cannot be measured
    if seed.password_hash.is_none()
        && seed
            .password
            .as_deref()
            .is_some_and(|password| !meets_min_password_length(password))
    {
        return Err(violation(ValidationError::PasswordTooShort));
    }

    Ok(())
}

/// Trims an optional seed identifier; present-but-blank is an error.
fn normalize_key(raw: Option<&str>, owner: &str) -> Result<Option<String>, DirectoryError> {
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => {
            Err(DirectoryError::EmptyIdentifier(owner.to_string()))
        }
        Some(value) => Ok(Some(value.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(name: &str, email: Option<&str>, phone: Option<&str>, pass: Option<&str>) -> IdentitySeed {
        IdentitySeed {
            display_name: name.to_string(),
            email: email.map(str::to_string),
            phone: phone.map(str::to_string),
            password: pass.map(str::to_string),
            password_hash: None,
        }
    }

    #[test]
    fn test_sample_directory() {
        let directory = Directory::sample().unwrap();
        assert_eq!(directory.email_count(), 1);
        assert_eq!(directory.phone_count(), 1);

        let entry = directory.find_by_email("user@example.com").unwrap();
        assert_eq!(entry.display_name, "John Doe");
        assert!(entry.secret.matches("password123"));
        assert!(!entry.secret.matches("password123 "));

        let phone = directory.find_by_phone("+213555123456").unwrap();
        assert_eq!(phone.email.as_deref(), Some("user@example.com"));
        assert!(directory.uses_plaintext_secrets());
    }

    #[test]
    fn test_from_seeds_trims_keys() {
        let seeds = vec![seed("Ann", Some("  ann@example.com "), Some(" +1555 "), Some("pw"))];
        let directory = Directory::from_seeds(&seeds).unwrap();
        assert!(directory.find_by_email("ann@example.com").is_some());
        assert!(directory.find_by_phone("+1555").is_some());
    }

    #[test]
    fn test_phone_only_record_needs_no_password() {
        let seeds = vec![seed("Bob", None, Some("+1666"), None)];
        let directory = Directory::from_seeds(&seeds).unwrap();
        assert_eq!(directory.email_count(), 0);
        assert_eq!(directory.find_by_phone("+1666").unwrap().display_name, "Bob");
    }

    #[test]
    fn test_rejects_malformed_seeds() {
        assert_eq!(
            Directory::from_seeds(&[seed(" ", Some("a@b.com"), None, Some("x"))]).unwrap_err(),
            DirectoryError::MissingDisplayName
        );
        assert_eq!(
            Directory::from_seeds(&[seed("Ann", None, None, Some("x"))]).unwrap_err(),
            DirectoryError::MissingIdentifier("Ann".into())
        );
        assert_eq!(
            Directory::from_seeds(&[seed("Ann", Some("  "), None, Some("x"))]).unwrap_err(),
            DirectoryError::EmptyIdentifier("Ann".into())
        );
        assert_eq!(
            Directory::from_seeds(&[seed("Ann", Some("a@b.com"), None, None)]).unwrap_err(),
            DirectoryError::MissingSecret("a@b.com".into())
        );
    }

    #[test]
    fn test_rejects_duplicate_keys() {
        let emails = vec![
            seed("Ann", Some("a@b.com"), None, Some("x")),
            seed("Another Ann", Some("a@b.com"), None, Some("y")),
        ];
        assert_eq!(
            Directory::from_seeds(&emails).unwrap_err(),
            DirectoryError::DuplicateEmail("a@b.com".into())
        );

        let phones = vec![
            seed("Bob", None, Some("+1666"), None),
            seed("Rob", None, Some("+1666"), None),
        ];
        assert_eq!(
            Directory::from_seeds(&phones).unwrap_err(),
            DirectoryError::DuplicatePhone("+1666".into())
        );
    }

    #[test]
    fn test_hashed_secret() {
        let mut hashed = seed("Cy", Some("cy@example.com"), None, None);
        hashed.password_hash = Some(password::hash("s3cret").unwrap());
        let directory = Directory::from_seeds(&[hashed]).unwrap();

        let entry = directory.find_by_email("cy@example.com").unwrap();
        assert!(entry.secret.matches("s3cret"));
        assert!(!entry.secret.matches("S3cret"));
        assert!(!directory.uses_plaintext_secrets());

        let mut broken = seed("Di", Some("di@example.com"), None, Some("plain"));
        broken.password_hash = Some("garbage".into());
        assert_eq!(
            Directory::from_seeds(&[broken]).unwrap_err(),
            DirectoryError::InvalidPasswordHash("di@example.com".into())
        );
    }

    #[test]
    fn test_signup_rules_on_seeds() {
        let good = seed("Ann", Some("ann@example.com"), Some("0555123456"), Some("long enough"));
        assert!(Directory::from_seeds_with(&[good], SeedRules::SignUp).is_ok());

        // The sample phone carries a country prefix, so only structural checks accept it
        assert!(Directory::from_seeds(&[IdentitySeed::sample()]).is_ok());
        assert_eq!(
            Directory::from_seeds_with(&[IdentitySeed::sample()], SeedRules::SignUp).unwrap_err(),
            DirectoryError::RuleViolation {
                owner: "John Doe".into(),
                rule: ValidationError::InvalidPhone,
            }
        );

        let bad_email = seed("Ann", Some("ann@example"), None, Some("long enough"));
        assert_eq!(
            Directory::from_seeds_with(&[bad_email], SeedRules::SignUp).unwrap_err(),
            DirectoryError::RuleViolation {
                owner: "Ann".into(),
                rule: ValidationError::InvalidEmail,
            }
        );

        let short = seed("Ann", Some("ann@example.com"), None, Some("short"));
        assert_eq!(
            Directory::from_seeds_with(&[short], SeedRules::SignUp).unwrap_err(),
            DirectoryError::RuleViolation {
                owner: "Ann".into(),
                rule: ValidationError::PasswordTooShort,
            }
        );

        let mut hashed = seed("Cy", Some("cy@example.com"), None, None);
        hashed.password_hash = Some(password::hash("tiny").unwrap());
        assert!(Directory::from_seeds_with(&[hashed], SeedRules::SignUp).is_ok());
    }
}
