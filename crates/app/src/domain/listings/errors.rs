//! Listings service errors.

use std::num::TryFromIntError;

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Errors raised by the listing store.
#[derive(Debug, Error)]
pub enum ListingsServiceError {
    /// No listing exists with the given identifier.
    #[error("listing not found")]
    NotFound,

    /// A required field is missing or blank.
    #[error("missing required data")]
    MissingRequiredData,

    /// A field is present but outside its allowed range.
    #[error("invalid data")]
    InvalidData,

    /// The underlying store failed.
    #[error("storage error")]
    Sql(#[source] Error),

    /// The price does not fit the storage representation.
    #[error("invalid price value")]
    InvalidPrice(#[from] TryFromIntError),
}

impl From<Error> for ListingsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}
