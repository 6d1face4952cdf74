//! Domain-level errors.
//!
//! These are the codes callers of the account core see. They are independent
//! of infrastructure concerns: storage failures are translated into
//! [`DomainError::Internal`] before they get here.

use thiserror::Error;

/// Business-facing error codes returned by the user service.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainError {
    /// Unexpected failure (storage, hashing, data consistency)
    #[error("internal error")]
    Internal,

    #[error("invalid username")]
    InvalidUsername,

    #[error("password is too short")]
    TooShortPassword,

    #[error("password is too long")]
    TooLongPassword,

    /// Unknown username or wrong password. The two cases share one code so
    /// callers cannot probe which usernames exist.
    #[error("wrong username or password")]
    WrongUsernameOrPassword,

    /// Caller passed an identifier the store can never assign
    #[error("invalid user id")]
    InvalidUserId,

    #[error("user not found")]
    UserNotFound,

    #[error("username is already reserved")]
    UsernameReserved,
}

impl DomainError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Internal => "INTERNAL_ERROR",
            DomainError::InvalidUsername => "INVALID_USERNAME",
            DomainError::TooShortPassword => "TOO_SHORT_PASSWORD",
            DomainError::TooLongPassword => "TOO_LONG_PASSWORD",
            DomainError::WrongUsernameOrPassword => "WRONG_USERNAME_OR_PASSWORD",
            DomainError::InvalidUserId => "INVALID_USER_ID",
            DomainError::UserNotFound => "USER_NOT_FOUND",
            DomainError::UsernameReserved => "USERNAME_RESERVED",
        }
    }

    /// Message safe to show to an end user (hides internal details)
    pub fn user_message(&self) -> &'static str {
        match self {
            DomainError::Internal => "Something went wrong, please try again later.",
            DomainError::InvalidUsername => {
                "Username must be 3 to 30 characters long and must not contain spaces."
            }
            DomainError::TooShortPassword => "Password must be at least 8 characters long.",
            DomainError::TooLongPassword => "Password must not exceed 72 bytes.",
            DomainError::WrongUsernameOrPassword => "Wrong username or password.",
            DomainError::InvalidUserId => "User id must be a positive number.",
            DomainError::UserNotFound => "User not found.",
            DomainError::UsernameReserved => "This username is already taken.",
        }
    }

    /// True for failures that indicate a fault rather than a rejected request
    pub fn is_internal(&self) -> bool {
        matches!(self, DomainError::Internal)
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
