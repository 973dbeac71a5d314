//! Classify SQLx failures into typed storage errors.
//!
//! Relies on the driver's error kind (MySQL 1062 duplicate entry,
//! 1451/1452 foreign key) rather than message text.

use sf_core::errors::{DomainError, StorageErrorCode};
use sqlx::error::ErrorKind;

pub fn code_for_kind(kind: ErrorKind) -> StorageErrorCode {
    match kind {
        ErrorKind::UniqueViolation => StorageErrorCode::UniqueViolation,
        ErrorKind::ForeignKeyViolation => StorageErrorCode::ForeignKeyViolation,
        _ => StorageErrorCode::Other,
    }
}

pub fn storage_code(error: &sqlx::Error) -> StorageErrorCode {
    match error {
        sqlx::Error::Database(db) => code_for_kind(db.kind()),
        _ => StorageErrorCode::Other,
    }
}

pub fn map_sqlx_error(error: sqlx::Error) -> DomainError {
    let code = storage_code(&error);
    if code == StorageErrorCode::Other {
        tracing::error!("Database error: {}", error);
    } else {
        tracing::debug!(%code, "Constraint violation: {}", error);
    }
    DomainError::storage(code, error.to_string())
}
