//! User store: translates account operations into single SeaORM statements.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    NotSet, QueryFilter, QuerySelect, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::error::{StoreError, StoreResult};
use domain::{User, MIN_USER_ID};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Stored account fields, without credential material.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct UserRecord {
    pub id: i32,
    pub username: String,
    pub registered_at: chrono::DateTime<chrono::Utc>,
    pub current_balance: rust_decimal::Decimal,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User::hydrate(
            record.id,
            record.username,
            record.registered_at,
            record.current_balance,
        )
    }
}

impl From<user::Model> for UserRecord {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            registered_at: model.registered_at,
            current_balance: model.current_balance,
        }
    }
}

/// Minimal material needed to check a login. Only used for authentication.
#[derive(Clone, PartialEq, Eq, FromQueryResult)]
pub struct LoginRecord {
    pub id: i32,
    pub password_hash: String,
}

impl std::fmt::Debug for LoginRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRecord")
            .field("id", &self.id)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

#[derive(FromQueryResult)]
struct IdOnly {
    #[allow(dead_code)]
    id: i32,
}

/// User store trait for dependency injection.
///
/// Every method is one round-trip with no retry.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Account fields by id, `NotFound` when no row matches
    async fn find_by_id(&self, id: i32) -> StoreResult<UserRecord>;

    /// Id and password hash by username, `NotFound` when no row matches
    async fn find_login_by_username(&self, username: &str) -> StoreResult<LoginRecord>;

    /// Whether the username is taken. Never returns `NotFound`.
    async fn exists_by_username(&self, username: &str) -> StoreResult<bool>;

    /// Insert an unsaved user with its hash and return the row as stored
    async fn insert(&self, user: &User, password_hash: &str) -> StoreResult<UserRecord>;
}

/// SeaORM-backed implementation of [`UserRepository`].
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Log a storage error with its context and collapse it into `Internal`.
fn storage_failure(operation: &'static str, context: String) -> impl FnOnce(DbErr) -> StoreError {
    move |err| {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::warn!(operation, %context, %detail, "Unique constraint violated");
            }
            _ => {
                tracing::error!(operation, %context, error = %err, "User store operation failed");
            }
        }
        StoreError::Internal
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> StoreResult<UserRecord> {
        UserEntity::find_by_id(id)
            .select_only()
            .column(user::Column::Id)
            .column(user::Column::Username)
            .column(user::Column::RegisteredAt)
            .column(user::Column::CurrentBalance)
            .into_model::<UserRecord>()
            .one(&self.db)
            .await
            .map_err(storage_failure("find_by_id", format!("user_id = {}", id)))?
            .ok_or(StoreError::NotFound)
    }

    async fn find_login_by_username(&self, username: &str) -> StoreResult<LoginRecord> {
        UserEntity::find()
            .select_only()
            .column(user::Column::Id)
            .column(user::Column::PasswordHash)
            .filter(user::Column::Username.eq(username))
            .into_model::<LoginRecord>()
            .one(&self.db)
            .await
            .map_err(storage_failure(
                "find_login_by_username",
                format!("username = {}", username),
            ))?
            .ok_or(StoreError::NotFound)
    }

    async fn exists_by_username(&self, username: &str) -> StoreResult<bool> {
        let found = UserEntity::find()
            .select_only()
            .column(user::Column::Id)
            .filter(user::Column::Username.eq(username))
            .into_model::<IdOnly>()
            .one(&self.db)
            .await
            .map_err(storage_failure(
                "exists_by_username",
                format!("username = {}", username),
            ))?;

        Ok(found.is_some())
    }

    async fn insert(&self, user: &User, password_hash: &str) -> StoreResult<UserRecord> {
        let active_model = ActiveModel {
            id: NotSet,
            username: Set(user.username().to_string()),
            password_hash: Set(password_hash.to_string()),
            registered_at: Set(user.registered_at()),
            current_balance: Set(user.current_balance()),
        };

        let model = active_model.insert(&self.db).await.map_err(storage_failure(
            "insert",
            format!("username = {}", user.username()),
        ))?;

        if model.id < MIN_USER_ID {
            tracing::error!(
                username = user.username(),
                id = model.id,
                "Store returned an unusable identifier for new user"
            );
            return Err(StoreError::Internal);
        }

        Ok(model.into())
    }
}
