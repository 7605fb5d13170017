//! SQLite storage for user profiles and coach/client links.

mod model;
mod repository;

pub use model::{CoachClientDB, ProfileDB};
pub use repository::{AccountRepository, CoachClientRepository};
