//! Coachfit Core - account lifecycle, goal progress and access policy.
//!
//! This crate contains the business logic of the coaching client. It is
//! database-agnostic and defines traits that are implemented by the
//! `storage-sqlite` crate. The identity service is likewise consumed through
//! a trait.

pub mod access;
pub mod accounts;
pub mod auth;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod progress;
pub mod utils;
pub mod workouts;

#[cfg(test)]
pub(crate) mod testing;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
