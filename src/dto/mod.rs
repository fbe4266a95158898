//! DTO modules that bridge services with the JSON API.

pub mod appointment;
pub mod error;
pub mod review;
pub mod vet;
