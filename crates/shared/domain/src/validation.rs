//! Username and password format rules.
//!
//! All checks are pure. Composite checks run an ordered rule list and stop at
//! the first failure, so the reported code is always the earliest broken rule.

use crate::constants::{
    MAX_PASSWORD_BYTES, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH,
};
use crate::error::{DomainError, DomainResult};

/// Raw credentials as typed by a user.
#[derive(Clone, Copy)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub raw_password: &'a str,
}

/// A single format rule over a pair of credentials.
pub type CredentialRule = fn(&Credentials<'_>) -> DomainResult<()>;

/// Rules shared by login and registration, in evaluation order.
pub const CREDENTIAL_RULES: &[CredentialRule] = &[username_rule, password_rule];

fn username_rule(credentials: &Credentials<'_>) -> DomainResult<()> {
    validate_username(credentials.username)
}

fn password_rule(credentials: &Credentials<'_>) -> DomainResult<()> {
    validate_raw_password(credentials.raw_password)
}

/// Username must be 3 to 30 characters, not blank, and free of spaces.
pub fn validate_username(username: &str) -> DomainResult<()> {
    let length = username.chars().count();
    let is_valid = !username.trim().is_empty()
        && (MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&length)
        && !username.contains(' ');

    if is_valid {
        Ok(())
    } else {
        Err(DomainError::InvalidUsername)
    }
}

/// Password must be at least 8 characters and at most 72 bytes as UTF-8.
pub fn validate_raw_password(raw_password: &str) -> DomainResult<()> {
    if raw_password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::TooShortPassword);
    }

    // `str::len` is the UTF-8 byte count
    if raw_password.len() > MAX_PASSWORD_BYTES {
        return Err(DomainError::TooLongPassword);
    }

    Ok(())
}

/// Run [`CREDENTIAL_RULES`] until the first failure.
pub fn validate_credentials(username: &str, raw_password: &str) -> DomainResult<()> {
    let credentials = Credentials {
        username,
        raw_password,
    };
    CREDENTIAL_RULES
        .iter()
        .try_for_each(|rule| rule(&credentials))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_length_bounds() {
        assert_eq!(validate_username("ab"), Err(DomainError::InvalidUsername));
        assert_eq!(validate_username("abc"), Ok(()));
        assert_eq!(validate_username(&"a".repeat(30)), Ok(()));
        assert_eq!(
            validate_username(&"a".repeat(31)),
            Err(DomainError::InvalidUsername)
        );
    }

    #[test]
    fn test_username_blank_or_spaced() {
        for bad in ["", "   ", "\t\t\t\t", "alice bob", " alice", "alice "] {
            assert_eq!(
                validate_username(bad),
                Err(DomainError::InvalidUsername),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_username_only_space_character_is_forbidden() {
        assert_eq!(validate_username("alice\tbob"), Ok(()));
        assert_eq!(validate_username("alice_123"), Ok(()));
    }

    #[test]
    fn test_username_counts_characters_not_bytes() {
        // 3 characters, 6 bytes
        assert_eq!(validate_username("äöü"), Ok(()));
        // 30 characters, 60 bytes
        assert_eq!(validate_username(&"é".repeat(30)), Ok(()));
    }

    #[test]
    fn test_password_minimum_length() {
        assert_eq!(validate_raw_password(""), Err(DomainError::TooShortPassword));
        assert_eq!(
            validate_raw_password("1234567"),
            Err(DomainError::TooShortPassword)
        );
        assert_eq!(validate_raw_password("12345678"), Ok(()));
    }

    #[test]
    fn test_password_byte_limit() {
        assert_eq!(validate_raw_password(&"a".repeat(72)), Ok(()));
        assert_eq!(
            validate_raw_password(&"a".repeat(73)),
            Err(DomainError::TooLongPassword)
        );
    }

    #[test]
    fn test_password_byte_limit_uses_utf8_size() {
        // 36 characters, 72 bytes
        assert_eq!(validate_raw_password(&"é".repeat(36)), Ok(()));
        // 37 characters, 74 bytes
        assert_eq!(
            validate_raw_password(&"é".repeat(37)),
            Err(DomainError::TooLongPassword)
        );
    }

    #[test]
    fn test_multibyte_password_still_needs_eight_characters() {
        // 7 characters, 14 bytes
        assert_eq!(
            validate_raw_password(&"é".repeat(7)),
            Err(DomainError::TooShortPassword)
        );
    }

    #[test]
    fn test_credentials_username_checked_first() {
        assert_eq!(
            validate_credentials("x", "short"),
            Err(DomainError::InvalidUsername)
        );
        assert_eq!(
            validate_credentials("alice123", "short"),
            Err(DomainError::TooShortPassword)
        );
        assert_eq!(validate_credentials("alice123", "hunter2pass"), Ok(()));
    }

    #[test]
    fn test_password_minimum_counts_chars_not_utf16_units() {
        // 7 chars, 14 UTF-16 units, 28 bytes
        assert_eq!(
            validate_raw_password(&"😀".repeat(7)),
            Err(DomainError::TooShortPassword)
        );
        assert_eq!(validate_raw_password(&"😀".repeat(8)), Ok(()));
        // 19 chars, 76 bytes
        assert_eq!(
            validate_raw_password(&"😀".repeat(19)),
            Err(DomainError::TooLongPassword)
        );
    }
}
