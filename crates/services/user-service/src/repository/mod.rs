//! Repository layer for data access.

pub mod entities;
mod error;
mod user_repository;

pub use error::{StoreError, StoreResult};
pub use user_repository::{LoginRecord, UserRecord, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
