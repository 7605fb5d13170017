//! SQLite storage implementation for Coachfit.
//!
//! This crate owns everything Diesel related and implements the repository
//! traits defined in `coachfit-core`:
//! - Database connection pooling and management
//! - Embedded Diesel migrations
//! - Repository implementations for profiles, goals, workouts and progress
//! - Database-specific model types (with Diesel derives)
//!
//! ```text
//!        core (domain, services)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```
//!
//! Reads go through the r2d2 pool. Writes are serialized through a single
//! writer task, see [`db::WriteHandle`].

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod accounts;
pub mod goals;
pub mod progress;
pub mod workouts;

#[cfg(test)]
pub(crate) mod testing;

pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

pub use errors::{IntoCore, StorageError};

pub use accounts::{AccountRepository, CoachClientRepository};
pub use goals::GoalRepository;
pub use progress::ProgressRepository;
pub use workouts::WorkoutRepository;

// Re-export from coachfit-core for convenience
pub use coachfit_core::errors::{DatabaseError, Error, Result};
