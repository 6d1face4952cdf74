//! User service - login, registration and lookup of accounts.
//!
//! Each operation is one linear pipeline that stops at the first failure.
//! Store codes are translated here and never reach callers.

use async_trait::async_trait;
use std::sync::Arc;

use domain::{
    validate_credentials, DomainError, DomainResult, Password, User, MIN_USER_ID,
};

use super::logging::{CallContext, OperationLogger, OperationRecord, TracingOperationLogger};
use crate::repository::{StoreError, UserRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Authenticate and return the account.
    ///
    /// Unknown username and wrong password both fail with
    /// `WrongUsernameOrPassword`.
    async fn login(&self, username: &str, raw_password: &str) -> DomainResult<User>;

    /// Create an account and return it with its new id.
    async fn register(&self, username: &str, raw_password: &str) -> DomainResult<User>;

    /// Look up an account by id.
    async fn find(&self, user_id: i32) -> DomainResult<User>;
}

/// Domain failure plus diagnostic detail that only goes to the logger.
#[derive(Debug)]
struct Fault {
    error: DomainError,
    detail: Option<String>,
}

impl Fault {
    fn internal(detail: impl Into<String>) -> Self {
        Self {
            error: DomainError::Internal,
            detail: Some(detail.into()),
        }
    }
}

impl From<DomainError> for Fault {
    fn from(error: DomainError) -> Self {
        Self {
            error,
            detail: None,
        }
    }
}

/// Concrete implementation of [`UserService`] over a [`UserRepository`].
///
/// Holds no per-call state; share it behind an `Arc`.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    logger: Arc<dyn OperationLogger>,
}

impl UserManager {
    /// Create a service that logs through `tracing`
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self::with_logger(repo, Arc::new(TracingOperationLogger))
    }

    /// Create a service with a custom operation logger
    pub fn with_logger(repo: Arc<dyn UserRepository>, logger: Arc<dyn OperationLogger>) -> Self {
        Self { repo, logger }
    }

    /// Report the outcome and strip the diagnostic detail.
    fn finish<T>(&self, context: &CallContext, outcome: Result<T, Fault>) -> DomainResult<T> {
        match outcome {
            Ok(value) => {
                self.logger.record(&OperationRecord {
                    context,
                    error: None,
                    detail: None,
                });
                Ok(value)
            }
            Err(fault) => {
                self.logger.record(&OperationRecord {
                    context,
                    error: Some(fault.error),
                    detail: fault.detail.as_deref(),
                });
                Err(fault.error)
            }
        }
    }

    async fn try_find(&self, user_id: i32) -> Result<User, Fault> {
        if user_id < MIN_USER_ID {
            return Err(DomainError::InvalidUserId.into());
        }

        match self.repo.find_by_id(user_id).await {
            Ok(record) => Ok(record.into()),
            Err(StoreError::NotFound) => Err(DomainError::UserNotFound.into()),
            Err(StoreError::Internal) => Err(Fault::internal("user lookup failed")),
        }
    }

    async fn try_login(&self, username: &str, raw_password: &str) -> Result<User, Fault> {
        validate_credentials(username, raw_password)?;

        let login = match self.repo.find_login_by_username(username).await {
            Ok(login) => login,
            Err(StoreError::NotFound) => return Err(DomainError::WrongUsernameOrPassword.into()),
            Err(StoreError::Internal) => {
                return Err(Fault::internal("login material lookup failed"))
            }
        };

        if !Password::from_hash(login.password_hash).verify(raw_password) {
            return Err(DomainError::WrongUsernameOrPassword.into());
        }

        // The id was just read from the store, so a miss here is a
        // consistency fault rather than an ordinary not-found.
        match self.repo.find_by_id(login.id).await {
            Ok(record) => Ok(record.into()),
            Err(StoreError::NotFound) => Err(Fault::internal(format!(
                "authenticated user_id = {} disappeared before it could be loaded",
                login.id
            ))),
            Err(StoreError::Internal) => Err(Fault::internal(format!(
                "loading authenticated user_id = {} failed",
                login.id
            ))),
        }
    }

    async fn try_register(&self, username: &str, raw_password: &str) -> Result<User, Fault> {
        validate_credentials(username, raw_password)?;

        match self.repo.exists_by_username(username).await {
            Ok(false) => {}
            Ok(true) => return Err(DomainError::UsernameReserved.into()),
            Err(_) => return Err(Fault::internal("username existence check failed")),
        }

        let password = Password::hash(raw_password)
            .map_err(|e| Fault::internal(format!("password hashing failed: {}", e)))?;

        let user = User::new_unsaved(username);
        let stored = self
            .repo
            .insert(&user, password.as_str())
            .await
            .map_err(|_| Fault::internal("inserting new user failed"))?;

        Ok(stored.into())
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn login(&self, username: &str, raw_password: &str) -> DomainResult<User> {
        let context = CallContext::new("login").with_extra(format!("username = {}", username));
        let outcome = self.try_login(username, raw_password).await;
        self.finish(&context, outcome)
    }

    async fn register(&self, username: &str, raw_password: &str) -> DomainResult<User> {
        let context =
            CallContext::new("register").with_extra(format!("username = {}", username));
        let outcome = self.try_register(username, raw_password).await;
        self.finish(&context, outcome)
    }

    async fn find(&self, user_id: i32) -> DomainResult<User> {
        let context = CallContext::new("find").with_extra(format!("user_id = {}", user_id));
        let outcome = self.try_find(user_id).await;
        self.finish(&context, outcome)
    }
}
