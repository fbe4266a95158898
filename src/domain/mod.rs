//! Domain aggregates exposed by the clinic service layer.

pub mod appointment;
pub mod review;
pub mod types;
pub mod vet;
