//! SQLite storage for workouts and workout sessions.

mod model;
mod repository;

pub use model::{WorkoutDB, WorkoutSessionDB};
pub use repository::WorkoutRepository;
