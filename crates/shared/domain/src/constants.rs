//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Users
// =============================================================================

/// Identifier carried by a user that has not been stored yet
pub const UNSAVED_USER_ID: i32 = -1;

/// Smallest identifier the store ever assigns
pub const MIN_USER_ID: i32 = 1;

// =============================================================================
// Validation
// =============================================================================

/// Minimum username length (characters)
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum username length (characters)
pub const MAX_USERNAME_LENGTH: usize = 30;

/// Minimum password length, counted in Unicode scalar values (`char`s),
/// not UTF-16 units: seven emoji are seven characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password size in UTF-8 bytes accepted by the hasher
pub const MAX_PASSWORD_BYTES: usize = 72;
