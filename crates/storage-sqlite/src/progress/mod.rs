//! SQLite storage for progress (body measurement) entries.

mod model;
mod repository;

pub use model::ProgressEntryDB;
pub use repository::ProgressRepository;
