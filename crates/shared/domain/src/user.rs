//! User domain entity.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::constants::UNSAVED_USER_ID;

/// User account as seen by callers.
///
/// Never carries credential material. Fields are read-only once built;
/// build with [`User::new_unsaved`] or [`User::hydrate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: i32,
    username: String,
    registered_at: DateTime<Utc>,
    current_balance: Decimal,
}

impl User {
    /// Create a user that has not been stored yet.
    ///
    /// Carries the sentinel id, the current time as registration time and a
    /// zero balance.
    pub fn new_unsaved(username: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_USER_ID,
            username: username.into(),
            registered_at: Utc::now(),
            current_balance: Decimal::ZERO,
        }
    }

    /// Rebuild a stored user from its persisted fields.
    pub fn hydrate(
        id: i32,
        username: impl Into<String>,
        registered_at: DateTime<Utc>,
        current_balance: Decimal,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            registered_at,
            current_balance,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn current_balance(&self) -> Decimal {
        self.current_balance
    }

    /// Check whether the store has assigned an identifier
    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_USER_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_unsaved_defaults() {
        let before = Utc::now();
        let user = User::new_unsaved("alice123");

        assert_eq!(user.id(), UNSAVED_USER_ID);
        assert!(!user.is_persisted());
        assert_eq!(user.username(), "alice123");
        assert_eq!(user.current_balance(), Decimal::ZERO);
        assert!(user.registered_at() >= before);
    }

    #[test]
    fn test_hydrate() {
        let at = Utc::now();
        let user = User::hydrate(3, "bob_the_saver", at, Decimal::new(12_550, 2));

        assert_eq!(user.id(), 3);
        assert_eq!(user.registered_at(), at);
        assert_eq!(user.current_balance().to_string(), "125.50");
    }

    #[test]
    fn test_serialized_user_has_no_secret_fields() {
        let user = User::hydrate(1, "alice123", Utc::now(), Decimal::ZERO);
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["username"], "alice123");
        assert!(json.get("password_hash").is_none());
    }
}
