use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

/// Outcome kinds surfaced by services to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request data failed validation (bad score, malformed field, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("resource not found")]
    NotFound,

    /// The acting owner is not allowed to touch the resource.
    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::InvalidInput(err.to_string())
    }
}
