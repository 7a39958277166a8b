//! Configuration management for the sign-in directory
//!
//! Seed identities come from an optional `config.toml`; scalar settings accept
//! `SIGNIN__*` environment overrides. Without a file, the built-in sample identity
//! is used.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

use crate::auth::Directory;
use crate::auth::credentials::SeedRules;
use crate::error::DirectoryError;

/// Default config file name, resolved relative to the working directory
const DEFAULT_CONFIG_PATH: &str = "config";

/// Environment variable prefix for overrides
const ENV_PREFIX: &str = "SIGNIN";

/// One identity as written in configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct IdentitySeed {
    pub display_name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    /// Plaintext password, compared byte-exact
    #[serde(default)]
    pub password: Option<String>,

    /// Argon2 PHC string; takes precedence over `password`
    #[serde(default)]
    pub password_hash: Option<String>,
}

impl IdentitySeed {
    /// The sample identity the sign-in screen ships with.
    pub fn sample() -> Self {
        Self {
            display_name: "John Doe".to_string(),
            email: Some("user@example.com".to_string()),
            phone: Some("+213555123456".to_string()),
            password: Some("password123".to_string()),
            password_hash: None,
        }
    }
}

fn sample_users() -> Vec<IdentitySeed> {
    vec![IdentitySeed::sample()]
}

/// Directory configuration: the seed records loaded once at startup.
///
/// `users` comes from the file only. Scalar keys may be overridden from the
/// environment, e.g. `SIGNIN__ENFORCE_SIGNUP_RULES=true`.
#[derive(Debug, Deserialize, Clone)]
pub struct DirectoryConfig {
    #[serde(default = "sample_users")]
    pub users: Vec<IdentitySeed>,

    /// Hold seeds to the sign-up form's field rules as well
    #[serde(default)]
    pub enforce_signup_rules: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            users: sample_users(),
            enforce_signup_rules: false,
        }
    }
}

impl DirectoryConfig {
    /// Load configuration from ./config.toml (if present) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(
            File::with_name(DEFAULT_CONFIG_PATH).required(false),
            environment(),
        )
    }

    /// Load configuration from an explicit file; the file must exist
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(File::from(path).required(true), environment())
    }

    /// Parse configuration from inline TOML
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        Self::build(File::from_str(toml, FileFormat::Toml), environment())
    }

    fn build<S>(file: S, env: Environment) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder().add_source(file).add_source(env).build()?;
        settings.try_deserialize()
    }

    pub fn seed_rules(&self) -> SeedRules {
        if self.enforce_signup_rules {
            SeedRules::SignUp
        } else {
            SeedRules::Structural
        }
    }

    /// Build the read-only directory from the configured seeds; this is where
    /// seed records are validated.
    pub fn build_directory(&self) -> Result<Directory, DirectoryError> {
        Directory::from_seeds_with(&self.users, self.seed_rules())
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}
