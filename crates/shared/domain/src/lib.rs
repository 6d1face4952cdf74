//! Domain layer - Core account entities, rules and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the user entity, credential format rules, password hashing and the error
//! codes the account core reports.

pub mod constants;
pub mod error;
pub mod password;
pub mod session;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::{Password, PasswordError};
pub use session::Session;
pub use user::User;
pub use validation::{validate_credentials, validate_raw_password, validate_username};
