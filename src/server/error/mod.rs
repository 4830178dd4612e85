//! Error types and their mapping to caller-visible failures.
//!
//! `AppError` is the top-level error type returned by every manager operation. It wraps
//! the domain-specific errors and storage failures, and converts into the `ErrorDto`
//! handed to the presentation layer without altering the failure kind.

pub mod auth;
pub mod config;
pub mod order;
pub mod shift;

use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ErrorKind},
    server::error::{auth::AuthError, config::ConfigError, order::OrderError, shift::ShiftError},
};

/// Top-level application error type.
///
/// Every manager operation returns either its success value or exactly one of these.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Caller identity is not allowed to perform the operation.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Order lifecycle precondition violated.
    #[error(transparent)]
    OrderErr(#[from] OrderError),

    /// Shift lifecycle precondition violated.
    #[error(transparent)]
    ShiftErr(#[from] ShiftError),

    /// Database operation error from SeaORM.
    ///
    /// Surfaced as-is and never retried inside the core.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Referenced entity does not exist.
    ///
    /// # Fields
    /// - Message describing what was not found
    #[error("{0}")]
    NotFound(String),

    /// Malformed caller input, such as an unparseable id.
    ///
    /// # Fields
    /// - Message describing what was invalid
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Failure kind exposed to callers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigErr(_) => ErrorKind::Misconfigured,
            Self::DbErr(_) => ErrorKind::StorageFailure,
            Self::AuthErr(_) => ErrorKind::Forbidden,
            Self::OrderErr(err) => err.kind(),
            Self::ShiftErr(err) => err.kind(),
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::BadRequest(_) => ErrorKind::InvalidInput,
        }
    }

    /// Whether the caller may retry the same request verbatim.
    pub fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }
}

/// Converts application errors into caller-visible failures.
///
/// Logic and precondition failures carry their own message. Storage and configuration
/// failures are logged with full details, but only a generic message is returned to
/// avoid leaking implementation details.
impl From<AppError> for ErrorDto {
    fn from(err: AppError) -> Self {
        let kind = err.kind();
        let error = match err {
            AppError::DbErr(_) => {
                tracing::error!("Storage failure: {}", err);
                "Internal server error".to_string()
            }
            AppError::ConfigErr(_) => {
                tracing::error!("Configuration failure: {}", err);
                "Internal server error".to_string()
            }
            err => {
                tracing::debug!("Request rejected ({:?}): {}", kind, err);
                err.to_string()
            }
        };

        ErrorDto { kind, error }
    }
}
