//! Input validation utilities
//!
//! Shared checks applied to user-supplied text: the blank check used before any
//! lookup, and the field rules of the sign-up form.

/// Minimum password length for new accounts.
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Exact digit count of a sign-up phone number.
pub const PHONE_DIGITS: usize = 10;

/// Returns true if the input is empty once surrounding whitespace is removed.
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Validates `local@domain.tld` shape: no whitespace, exactly one `@`, and a
/// dot inside the domain with at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Exactly ten ASCII digits, nothing else.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Length is counted in characters, not bytes.
pub fn meets_min_password_length(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Strength label shown while a new password is typed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Fair => "Fair",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
        }
    }
}

/// One point each for minimum length, an uppercase letter, a digit and a symbol.
pub fn password_score(password: &str) -> u8 {
    let checks = [
        meets_min_password_length(password),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.iter().filter(|passed| **passed).count() as u8
}

/// Strength of a password; `None` when it scores no points at all.
pub fn password_strength(password: &str) -> Option<PasswordStrength> {
    match password_score(password) {
        0 => None,
        1 => Some(PasswordStrength::Weak),
        2 => Some(PasswordStrength::Fair),
        3 => Some(PasswordStrength::Good),
        _ => Some(PasswordStrength::Strong),
    }
}
