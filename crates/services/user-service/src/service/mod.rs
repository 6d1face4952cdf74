//! User service business logic and its logging bridge.

pub mod logging;
mod user_service;

pub use logging::{
    CallContext, NoopOperationLogger, OperationLogger, OperationRecord, TracingOperationLogger,
};
pub use user_service::{UserManager, UserService};
