//! Domain error types and error handling.
//!
//! Operational failures are the shared [`AppError`] taxonomy. Persistence
//! failures keep a typed [`StorageErrorCode`] so the HTTP layer never has
//! to inspect driver messages.

use std::fmt;
use thiserror::Error;

pub use sf_shared::errors::{AppError, ErrorKind};

/// Classified persistence failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageErrorCode {
    /// A unique key already holds this value
    UniqueViolation,
    /// A referenced row does not exist (or is still referenced)
    ForeignKeyViolation,
    /// Any other store failure
    Other,
}

impl fmt::Display for StorageErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageErrorCode::UniqueViolation => write!(f, "unique_violation"),
            StorageErrorCode::ForeignKeyViolation => write!(f, "foreign_key_violation"),
            StorageErrorCode::Other => write!(f, "other"),
        }
    }
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("Storage error ({code}): {message}")]
    Storage {
        code: StorageErrorCode,
        message: String,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn storage(code: StorageErrorCode, message: impl Into<String>) -> Self {
        DomainError::Storage {
            code,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Storage code, if this is a persistence failure
    pub fn storage_code(&self) -> Option<StorageErrorCode> {
        match self {
            DomainError::Storage { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// The taxonomy error, if this is an operational failure
    pub fn as_app_error(&self) -> Option<&AppError> {
        match self {
            DomainError::App(error) => Some(error),
            _ => None,
        }
    }
}

impl From<bcrypt::BcryptError> for DomainError {
    fn from(error: bcrypt::BcryptError) -> Self {
        DomainError::internal(format!("Password hashing failed: {}", error))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
