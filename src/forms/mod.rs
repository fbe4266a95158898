//! Request bodies accepted by the clinic routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod appointment;
pub mod vet;

#[derive(Debug, Error)]
/// Errors that can occur when turning request data into domain values.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid owner id")]
    InvalidOwnerId,

    #[error("invalid vet id")]
    InvalidVetId,

    #[error("invalid pet id")]
    InvalidPetId,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid specialty")]
    InvalidSpecialty,

    #[error("invalid status")]
    InvalidStatus,
}
