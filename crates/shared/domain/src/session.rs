//! Explicit session context for the signed-in user.
//!
//! Callers own a `Session` value and pass it where it is needed; there is no
//! process-wide current user.

use crate::user::User;

/// Who is signed in for the lifetime of a caller's interaction.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current_user: Option<User>,
}

impl Session {
    /// Session with nobody signed in
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session for a user returned by login or registration
    pub fn signed_in(user: User) -> Self {
        Self {
            current_user: Some(user),
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// Sign out, returning the user that was signed in
    pub fn sign_out(&mut self) -> Option<User> {
        self.current_user.take()
    }
}
