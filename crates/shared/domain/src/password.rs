//! Password value object - hashing and verification of account passwords.
//!
//! Hashes are PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$digest`):
//! algorithm, cost parameters and salt travel with the digest, so nothing
//! besides the string has to be stored.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

use crate::constants::MAX_PASSWORD_BYTES;

/// Failures raised while producing a hash.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password exceeds {} bytes", MAX_PASSWORD_BYTES)]
    TooLong,

    #[error("password hash failed: {0}")]
    Hash(argon2::password_hash::Error),
}

/// Hashed password.
///
/// Only ever holds the hash; the raw password is not retained.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a raw password with a fresh random salt.
    ///
    /// # Errors
    /// Returns [`PasswordError::TooLong`] for input above the hasher's size
    /// limit. Callers are expected to run validation first.
    pub fn hash(raw: &str) -> Result<Self, PasswordError> {
        if raw.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordError::TooLong);
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(raw.as_bytes(), &salt)
            .map_err(PasswordError::Hash)?;
        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap a hash loaded from storage.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a raw password against this hash.
    ///
    /// Uses the salt and parameters embedded in the hash. The digest
    /// comparison is constant-time. A malformed hash never verifies.
    pub fn verify(&self, raw: &str) -> bool {
        if raw.len() > MAX_PASSWORD_BYTES {
            return false;
        }

        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Self::argon2()
                .verify_password(raw.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash is malformed");
                false
            }
        }
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let raw = "hunter2pass";
        let password = Password::hash(raw).unwrap();

        assert!(password.verify(raw));
        assert!(!password.verify("hunter2pasS"));
        assert!(!password.verify(""));
    }

    #[test]
    fn test_hash_is_self_describing() {
        let password = Password::hash("SecurePassword123!").unwrap();

        assert!(password.as_str().starts_with("$argon2id$"));
        assert_ne!(password.as_str(), "SecurePassword123!");
    }

    #[test]
    fn test_password_from_hash() {
        let raw = "TestPassword123";
        let hash = Password::hash(raw).unwrap().into_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify(raw));
    }

    #[test]
    fn test_same_password_different_salts() {
        let raw = "SamePassword123";
        let first = Password::hash(raw).unwrap();
        let second = Password::hash(raw).unwrap();

        assert_ne!(first.as_str(), second.as_str());
        assert!(first.verify(raw));
        assert!(second.verify(raw));
    }

    #[test]
    fn test_oversized_input_is_rejected() {
        let raw = "a".repeat(MAX_PASSWORD_BYTES + 1);

        assert_eq!(Password::hash(&raw).unwrap_err(), PasswordError::TooLong);
        assert!(Password::hash(&"a".repeat(MAX_PASSWORD_BYTES)).is_ok());
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let password = Password::from_hash("not-a-phc-string");
        assert!(!password.verify("whatever123"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::hash("DebugPassword1").unwrap();
        let printed = format!("{:?}", password);

        assert!(printed.contains("[REDACTED]"));
        assert!(!printed.contains("argon2"));
    }
}
