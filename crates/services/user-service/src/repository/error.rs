//! Persistence-layer error codes.
//!
//! These never leave the service layer: the user service translates them
//! into domain codes according to the operation that hit them.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Query succeeded but matched no row
    #[error("record not found")]
    NotFound,

    /// Storage or transport failure; the cause is logged where it happened
    #[error("storage failure")]
    Internal,
}

pub type StoreResult<T> = Result<T, StoreError>;
