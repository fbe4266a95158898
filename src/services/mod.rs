//! Domain services invoked by the HTTP routes.
//!
//! Services are generic over the repository traits they need, validate
//! input, enforce ownership rules and translate domain entities into DTOs.

pub mod appointment;
pub mod errors;
pub mod review;
pub mod vet;

pub use errors::{ServiceError, ServiceResult};
