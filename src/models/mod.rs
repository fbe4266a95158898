//! Database models shared across the clinic repository.

pub mod appointment;
#[cfg(feature = "server")]
pub mod config;
pub mod review;
pub mod vet;
