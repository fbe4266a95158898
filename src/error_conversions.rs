//! Error conversion glue between the domain, repository and service layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions out of [`TypeConstraintError`] live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<TypeConstraintError> for crate::services::ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        crate::services::ServiceError::InvalidInput(val.to_string())
    }
}
